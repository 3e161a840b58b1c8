//! Pure display formatting shared by the card builder and the summary pane.

/// Abbreviate an engagement count the way the service's own UI does:
/// 1.0K at a thousand, 1.0M at a million, plain digits below that.
pub fn fmt_num(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Wall-clock seconds with one decimal place, e.g. "12.3".
pub fn fmt_elapsed(seconds: f64) -> String {
    format!("{seconds:.1}")
}

/// Sub-dollar API costs need the extra precision.
pub fn fmt_usd(value: f64) -> String {
    format!("${value:.4}")
}

pub fn fmt_jpy(value: f64) -> String {
    format!("¥{value:.2}")
}

/// An absent score renders as "-" rather than a fabricated zero.
pub fn fmt_score(score: Option<f64>) -> String {
    match score {
        Some(v) => format!("{v}"),
        None => "-".to_string(),
    }
}

/// Strip control characters from service-supplied text before it reaches
/// the terminal. Rewrites come out of an LLM pipeline, so an embedded
/// escape sequence could otherwise repaint or spoof parts of the screen.
/// Markup-looking text like `<script>` stays as-is; it is inert here.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}
