//! # climplot-plot
//!
//! Plot kinds over a climate-model [`Dataset`](climplot_grid::Dataset): each
//! request selects time steps, reduces the field and formats a render
//! payload ([`PlotOutput`]) with titles, labels, overlay text, colour limits
//! and export tables.
//!
//! ## Flow
//!
//! ```mermaid
//! graph LR
//!     R["PlotRequest"] -->|"validate"| K["PlotKind"]
//!     K --> S["select_indices"]
//!     S --> A["average"]
//!     A -->|"difference kinds"| D["difference"]
//!     A --> O["PlotOutput"]
//!     D --> O
//! ```
//!
//! ## Kinds
//!
//! | Kind | Periods | Body |
//! |------|---------|------|
//! | `map` | 1 (2 draws a difference) | field |
//! | `map_difference` | 2 | field |
//! | `zonal_profile` | 1 | line over latitude |
//! | `annual_cycle` | 1 or 2 | line over months, with band |
//! | `time_series` | 0 | line over model years |
//! | `line_difference_latitude` | 2 | line over latitude |
//! | `line_difference_time` | 2 | line over model years |

mod context;
mod error;
mod kinds;
mod output;
mod request;

use tracing::{debug, info_span};

pub use context::PlotContext;
pub use error::PlotError;
pub use output::{
    Band, ColorRange, ExportColumn, ExportTable, PlotBody, PlotOutput, RenderHints, Series,
    Statistic,
};
pub use request::{LineAxis, PlotKind, PlotRequest};

/// Builds the render payload for `request`.
///
/// # Errors
///
/// [`PlotError::InvalidRequest`] when the request fails
/// [`PlotRequest::validate`]; otherwise any calendar, grid or difference
/// error raised while selecting and reducing.
pub fn build_plot(request: &PlotRequest, ctx: &PlotContext<'_>) -> Result<PlotOutput, PlotError> {
    request.validate()?;
    let _plot = info_span!("plot", kind = request.kind().name()).entered();
    let output = kinds::build(request, ctx)?;
    debug!(
        title = %output.title.replace('\n', " | "),
        masked = output.masked,
        exports = output.exports.len(),
        "plot built"
    );
    Ok(output)
}
