//! Display formatting for movie figures

/// Averages in the watched summary, two decimals.
pub fn format_average(value: f64) -> String {
    format!("{:.2}", value)
}

/// Average runtime in the watched summary.
pub fn format_minutes(minutes: f64) -> String {
    format!("{:.0} min", minutes)
}

/// Runtime of a single movie; OMDb's "N/A" shows as-is.
pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) => format!("{} min", m),
        None => "N/A".to_string(),
    }
}

pub fn format_imdb_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}", r),
        None => "N/A".to_string(),
    }
}

/// OMDb sends "N/A" when it has no poster.
pub fn poster_src(poster_url: &str) -> Option<&str> {
    if poster_url.is_empty() || poster_url == "N/A" {
        None
    } else {
        Some(poster_url)
    }
}
