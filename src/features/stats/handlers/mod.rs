pub mod stats_handler;

pub use stats_handler::{
    __path_get_chart_colors, __path_get_overview, __path_get_summary, get_chart_colors,
    get_overview, get_summary,
};
