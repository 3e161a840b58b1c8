use crate::format::{fmt_num, fmt_score, sanitize};
use crate::model::RewriteResult;

/// Display-ready card built from one response record. Everything here is
/// already sanitized and formatted, so rendering is a pure layout concern.
/// `index` is the record's position in the response and doubles as its
/// identity: copy and open actions look cards up by it, and the sequence
/// is never reordered.
#[derive(Debug, Clone)]
pub struct ResultCard {
    pub index: usize,
    pub original_url: String,
    pub likes: String,
    pub retweets: String,
    pub replies: String,
    pub original_text: String,
    pub rewritten_text: String,
    pub dwell: String,
    pub reply: String,
    pub virality: String,
    /// Omitted sections stay `None`/empty; the renderer draws nothing for
    /// them rather than an empty container.
    pub call_to_action: Option<String>,
    pub thread: Vec<String>,
    pub image_url: Option<String>,
    copy_payload: String,
}

impl ResultCard {
    pub fn build(result: &RewriteResult, index: usize) -> Self {
        let rewritten_text = sanitize(&result.rewritten_text);
        let call_to_action = result
            .call_to_action
            .as_deref()
            .map(str::trim)
            .filter(|cta| !cta.is_empty())
            .map(sanitize);
        let thread: Vec<String> = result
            .thread
            .iter()
            .map(|entry| sanitize(entry))
            .filter(|entry| !entry.trim().is_empty())
            .collect();
        let image_url = result
            .image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(sanitize);

        let copy_payload = match &call_to_action {
            Some(cta) => format!("{rewritten_text}\n\n{cta}"),
            None => rewritten_text.clone(),
        };

        let scores = result.scores.unwrap_or_default();

        Self {
            index,
            original_url: sanitize(&result.original_url),
            likes: fmt_num(result.original_likes),
            retweets: fmt_num(result.original_retweets),
            replies: fmt_num(result.original_replies),
            original_text: sanitize(&result.original_text),
            rewritten_text,
            dwell: fmt_score(scores.dwell_potential),
            reply: fmt_score(scores.reply_potential),
            virality: fmt_score(scores.virality),
            call_to_action,
            thread,
            image_url,
            copy_payload,
        }
    }

    /// What the copy action puts on the clipboard: the rewrite, plus a
    /// blank line and the call to action when one exists.
    pub fn copy_payload(&self) -> &str {
        &self.copy_payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scores;

    fn result() -> RewriteResult {
        RewriteResult {
            original_url: "https://x.com/alice/status/1".to_string(),
            original_text: "original".to_string(),
            original_likes: 1500,
            original_retweets: 999,
            original_replies: 12,
            rewritten_text: "rewrite".to_string(),
            call_to_action: None,
            thread: Vec::new(),
            image_url: None,
            scores: Some(Scores {
                dwell_potential: Some(8.5),
                reply_potential: Some(7.0),
                virality: None,
            }),
        }
    }

    #[test]
    fn test_build_formats_metrics_and_scores() {
        let card = ResultCard::build(&result(), 0);
        assert_eq!(card.likes, "1.5K");
        assert_eq!(card.retweets, "999");
        assert_eq!(card.dwell, "8.5");
        assert_eq!(card.reply, "7");
        assert_eq!(card.virality, "-");
    }

    #[test]
    fn test_copy_payload_without_cta() {
        let card = ResultCard::build(&result(), 0);
        assert_eq!(card.copy_payload(), "rewrite");
    }

    #[test]
    fn test_copy_payload_appends_cta_after_blank_line() {
        let mut r = result();
        r.call_to_action = Some("follow me".to_string());
        let card = ResultCard::build(&r, 0);
        assert_eq!(card.copy_payload(), "rewrite\n\nfollow me");
    }

    #[test]
    fn test_empty_optional_sections_are_dropped() {
        let mut r = result();
        r.call_to_action = Some("   ".to_string());
        r.image_url = Some(String::new());
        r.thread = vec![String::new(), "part two".to_string()];
        let card = ResultCard::build(&r, 0);
        assert!(card.call_to_action.is_none());
        assert!(card.image_url.is_none());
        assert_eq!(card.thread, vec!["part two"]);
    }

    #[test]
    fn test_markup_in_text_stays_literal() {
        let mut r = result();
        r.rewritten_text = "<script>x</script>".to_string();
        let card = ResultCard::build(&r, 0);
        assert_eq!(card.rewritten_text, "<script>x</script>");
    }

    #[test]
    fn test_escape_sequences_are_stripped() {
        let mut r = result();
        r.rewritten_text = "click\x1b]8;;http://evil\x07here".to_string();
        let card = ResultCard::build(&r, 0);
        assert!(!card.rewritten_text.contains('\x1b'));
        assert!(!card.rewritten_text.contains('\x07'));
    }

    #[test]
    fn test_index_is_preserved() {
        let card = ResultCard::build(&result(), 4);
        assert_eq!(card.index, 4);
    }
}
