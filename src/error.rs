use thiserror::Error;

/// Domain failures that callers may want to match on.
///
/// I/O and parse problems in the loaders stay as `anyhow` errors with
/// context; these are the conditions the pipeline checks itself.
#[derive(Debug, Error)]
pub enum FluxError {
    #[error("x and y must have same first dimension: {thickness} thickness points but {flux} flux values")]
    LengthMismatch { thickness: usize, flux: usize },

    #[error("no flux values to plot")]
    EmptySeries,

    #[error("invalid colour '{0}': expected a matplotlib shorthand (b, g, r, c, m, y, k, w), a colour name or #rrggbb")]
    InvalidColor(String),

    #[error("rendering figure: {0}")]
    Render(String),
}
