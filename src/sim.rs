//! One-speed neutron transport through a 1-D slab, tallying track-length
//! flux in equal-width bins.  This is what produces `flux_output.txt`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Geometry and materials
// ---------------------------------------------------------------------------

/// Macroscopic cross sections for one material region `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub start: f64,
    pub end: f64,
    pub sigma_a: f64,
    pub sigma_s: f64,
    pub sigma_f: f64,
}

impl Region {
    pub fn sigma_t(&self) -> f64 {
        self.sigma_a + self.sigma_s
    }

    /// Mean fission neutrons per absorption.
    pub fn nu(&self) -> f64 {
        self.sigma_f / self.sigma_a
    }
}

/// A slab `[0, thickness]` made of contiguous regions, tallied in `bins`
/// equal-width bins.
#[derive(Debug, Clone)]
pub struct Slab {
    thickness: f64,
    bins: usize,
    regions: Vec<Region>,
}

impl Slab {
    pub fn new(thickness: f64, bins: usize, regions: Vec<Region>) -> Result<Self> {
        if !(thickness > 0.0) {
            bail!("slab thickness must be positive, got {thickness}");
        }
        if bins == 0 {
            bail!("slab needs at least one tally bin");
        }
        let Some(first) = regions.first() else {
            bail!("slab needs at least one region");
        };
        if first.start != 0.0 {
            bail!("first region starts at {} instead of 0", first.start);
        }
        for pair in regions.windows(2) {
            if pair[0].end != pair[1].start {
                bail!(
                    "regions are not contiguous: {} ends at {} but next starts at {}",
                    pair[0].start,
                    pair[0].end,
                    pair[1].start
                );
            }
        }
        if let Some(last) = regions.last() {
            if last.end != thickness {
                bail!("last region ends at {} instead of {thickness}", last.end);
            }
        }
        for r in &regions {
            if !(r.sigma_a > 0.0) || r.sigma_s < 0.0 || r.sigma_f < 0.0 {
                bail!("region at {}: cross sections must be non-negative with sigma_a > 0", r.start);
            }
        }
        Ok(Self {
            thickness,
            bins,
            regions,
        })
    }

    /// Unit slab with a fuel-rich inner half and a leaner outer half,
    /// tallied in ten bins.
    pub fn two_region() -> Self {
        Self {
            thickness: 1.0,
            bins: 10,
            regions: vec![
                Region {
                    start: 0.0,
                    end: 0.5,
                    sigma_a: 0.12,
                    sigma_s: 0.05,
                    sigma_f: 0.15,
                },
                Region {
                    start: 0.5,
                    end: 1.0,
                    sigma_a: 0.10,
                    sigma_s: 0.05,
                    sigma_f: 0.12,
                },
            ],
        }
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn bin_width(&self) -> f64 {
        self.thickness / self.bins as f64
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Region containing `x`; the slab's far face belongs to the last region.
    pub fn region_at(&self, x: f64) -> &Region {
        self.regions
            .iter()
            .find(|r| x >= r.start && x < r.end)
            .unwrap_or_else(|| &self.regions[self.regions.len() - 1])
    }

    /// Largest fission yield of any region; bounds `k_eff`.
    pub fn max_nu(&self) -> f64 {
        self.regions.iter().map(Region::nu).fold(0.0, f64::max)
    }
}

// ---------------------------------------------------------------------------
// Tally
// ---------------------------------------------------------------------------

/// Result of a transport run.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    /// Track-length flux per bin, normalised per source neutron and bin width.
    pub flux: Vec<f64>,
    /// Fission neutrons produced per source neutron.
    pub k_eff: f64,
    pub histories: usize,
    pub leaked: usize,
    pub absorbed: usize,
    pub fission_neutrons: usize,
}

/// Raw track-length sums per bin.
struct TrackTally {
    width: f64,
    sums: Vec<f64>,
}

impl TrackTally {
    fn new(slab: &Slab) -> Self {
        Self {
            width: slab.bin_width(),
            sums: vec![0.0; slab.bins()],
        }
    }

    /// Add the segment `[lo, hi]` (already clipped to the slab) to every bin
    /// it overlaps.
    fn add_track(&mut self, lo: f64, hi: f64) {
        if hi <= lo {
            return;
        }
        let last = self.sums.len() - 1;
        let first_bin = ((lo / self.width).floor() as usize).min(last);
        let last_bin = ((hi / self.width).floor() as usize).min(last);
        for (i, sum) in self
            .sums
            .iter_mut()
            .enumerate()
            .take(last_bin + 1)
            .skip(first_bin)
        {
            let b0 = i as f64 * self.width;
            let b1 = b0 + self.width;
            let overlap = hi.min(b1) - lo.max(b0);
            if overlap > 0.0 {
                *sum += overlap;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

fn random_direction(rng: &mut StdRng) -> f64 {
    if rng.gen::<bool>() { 1.0 } else { -1.0 }
}

/// Exponentially distributed flight length for total cross section `sigma_t`.
fn flight_distance(rng: &mut StdRng, sigma_t: f64) -> f64 {
    // 1 - U lies in (0, 1], keeping ln finite
    -(1.0 - rng.gen::<f64>()).ln() / sigma_t
}

/// Stochastic rounding of `nu` to an integer neutron count.
fn fission_yield(rng: &mut StdRng, nu: f64) -> usize {
    let base = nu.floor();
    let extra = if rng.gen::<f64>() < nu - base { 1 } else { 0 };
    base as usize + extra
}

/// Follow `histories` source neutrons born uniformly in the slab with
/// random direction.  Each flight uses the cross sections of the region it
/// starts in; leaving the slab or being absorbed ends the history.
pub fn simulate(slab: &Slab, histories: usize, seed: u64) -> Tally {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut track = TrackTally::new(slab);
    let (mut leaked, mut absorbed, mut fission_neutrons) = (0, 0, 0);
    let thickness = slab.thickness();

    for _ in 0..histories {
        let mut x = rng.gen::<f64>() * thickness;
        let mut dir = random_direction(&mut rng);

        loop {
            let sigma_t = slab.region_at(x).sigma_t();
            let next = x + dir * flight_distance(&mut rng, sigma_t);

            track.add_track(x.min(next).max(0.0), x.max(next).min(thickness));

            if !(0.0..=thickness).contains(&next) {
                leaked += 1;
                break;
            }
            x = next;

            let region = slab.region_at(x);
            if rng.gen::<f64>() < region.sigma_s / region.sigma_t() {
                dir = random_direction(&mut rng);
            } else {
                absorbed += 1;
                fission_neutrons += fission_yield(&mut rng, region.nu());
                break;
            }
        }
    }

    let norm = if histories == 0 {
        0.0
    } else {
        1.0 / (track.width * histories as f64)
    };
    let k_eff = if histories == 0 {
        0.0
    } else {
        fission_neutrons as f64 / histories as f64
    };

    log::debug!(
        "{histories} histories: {leaked} leaked, {absorbed} absorbed, {fission_neutrons} fission neutrons"
    );

    Tally {
        flux: track.sums.iter().map(|s| s * norm).collect(),
        k_eff,
        histories,
        leaked,
        absorbed,
        fission_neutrons,
    }
}

/// Write one flux value per line, the layout the plot loader reads.
pub fn write_flux(path: &Path, flux: &[f64]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut out = std::io::BufWriter::new(file);
    for v in flux {
        writeln!(out, "{v}").with_context(|| format!("writing {}", path.display()))?;
    }
    out.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_split_across_bins() {
        let slab = Slab::two_region();
        let mut t = TrackTally::new(&slab);
        t.add_track(0.05, 0.25);
        assert!((t.sums[0] - 0.05).abs() < 1e-12);
        assert!((t.sums[1] - 0.10).abs() < 1e-12);
        assert!((t.sums[2] - 0.05).abs() < 1e-12);
        assert!(t.sums[3..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn track_at_far_face_lands_in_last_bin() {
        let slab = Slab::two_region();
        let mut t = TrackTally::new(&slab);
        t.add_track(0.95, 1.0);
        assert!((t.sums[9] - 0.05).abs() < 1e-12);
    }

    #[test]
    fn region_lookup() {
        let slab = Slab::two_region();
        assert_eq!(slab.region_at(0.2).sigma_a, 0.12);
        assert_eq!(slab.region_at(0.5).sigma_a, 0.10);
        assert_eq!(slab.region_at(1.0).sigma_a, 0.10);
        assert!((slab.max_nu() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let slab = Slab::two_region();
        assert_eq!(simulate(&slab, 2_000, 7), simulate(&slab, 2_000, 7));
    }

    #[test]
    fn tally_is_physical() {
        let slab = Slab::two_region();
        let tally = simulate(&slab, 20_000, 42);
        assert_eq!(tally.flux.len(), 10);
        assert!(tally.flux.iter().all(|&f| f >= 0.0 && f.is_finite()));
        assert!(tally.flux.iter().any(|&f| f > 0.0));
        assert_eq!(tally.leaked + tally.absorbed, tally.histories);
        assert!(tally.k_eff >= 0.0 && tally.k_eff <= slab.max_nu());
        // thin slab: most neutrons escape
        assert!(tally.leaked > tally.absorbed);
    }

    #[test]
    fn flux_peaks_inside_the_slab() {
        let slab = Slab::two_region();
        let tally = simulate(&slab, 200_000, 1);
        let edge = (tally.flux[0] + tally.flux[9]) / 2.0;
        let centre = (tally.flux[4] + tally.flux[5]) / 2.0;
        assert!(centre > edge, "centre {centre} edge {edge}");
    }

    #[test]
    fn zero_histories() {
        let tally = simulate(&Slab::two_region(), 0, 0);
        assert_eq!(tally.k_eff, 0.0);
        assert!(tally.flux.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn rejects_gapped_regions() {
        let mut regions = Slab::two_region().regions().to_vec();
        regions[1].start = 0.6;
        assert!(Slab::new(1.0, 10, regions).is_err());
        assert!(Slab::new(1.0, 0, Slab::two_region().regions().to_vec()).is_err());
        assert!(Slab::new(1.0, 10, Vec::new()).is_err());
        assert!(Slab::new(1.0, 10, Slab::two_region().regions().to_vec()).is_ok());
    }

    #[test]
    fn writes_one_value_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flux_output.txt");
        write_flux(&path, &[1.5, 2.25]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1.5\n2.25\n");
    }
}
