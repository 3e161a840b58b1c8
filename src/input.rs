use crate::error::GenerateError;
use crate::model::{GenerationRequest, Settings};

/// Which form field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Accounts,
    TweetsToAnalyze,
    TweetsToRewrite,
    MinLikes,
    MinRetweets,
    GenerateImages,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Accounts => Field::TweetsToAnalyze,
            Field::TweetsToAnalyze => Field::TweetsToRewrite,
            Field::TweetsToRewrite => Field::MinLikes,
            Field::MinLikes => Field::MinRetweets,
            Field::MinRetweets => Field::GenerateImages,
            Field::GenerateImages => Field::Accounts,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Accounts => Field::GenerateImages,
            Field::TweetsToAnalyze => Field::Accounts,
            Field::TweetsToRewrite => Field::TweetsToAnalyze,
            Field::MinLikes => Field::TweetsToRewrite,
            Field::MinRetweets => Field::MinLikes,
            Field::GenerateImages => Field::MinRetweets,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Accounts => "Accounts (one per line)",
            Field::TweetsToAnalyze => "Tweets to analyze",
            Field::TweetsToRewrite => "Tweets to rewrite",
            Field::MinLikes => "Min likes",
            Field::MinRetweets => "Min retweets",
            Field::GenerateImages => "Generate images",
        }
    }
}

/// Raw text of every form field, exactly as typed. Parsing and validation
/// happen in [`FormState::collect`], never while editing.
#[derive(Debug, Clone)]
pub struct FormState {
    pub accounts: String,
    pub tweets_to_analyze: String,
    pub tweets_to_rewrite: String,
    pub min_likes: String,
    pub min_retweets: String,
    pub generate_images: bool,
    pub focus: Field,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            accounts: String::new(),
            tweets_to_analyze: "10".to_string(),
            tweets_to_rewrite: "5".to_string(),
            min_likes: "500".to_string(),
            min_retweets: "50".to_string(),
            generate_images: false,
            focus: Field::Accounts,
        }
    }
}

impl FormState {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn insert_char(&mut self, c: char) {
        match self.focused_text_mut() {
            Some(text) => text.push(c),
            None => {
                if c == ' ' {
                    self.generate_images = !self.generate_images;
                }
            }
        }
    }

    pub fn insert_newline(&mut self) {
        if self.focus == Field::Accounts {
            self.accounts.push('\n');
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn toggle(&mut self) {
        if self.focus == Field::GenerateImages {
            self.generate_images = !self.generate_images;
        }
    }

    pub fn field_text(&self, field: Field) -> &str {
        match field {
            Field::Accounts => &self.accounts,
            Field::TweetsToAnalyze => &self.tweets_to_analyze,
            Field::TweetsToRewrite => &self.tweets_to_rewrite,
            Field::MinLikes => &self.min_likes,
            Field::MinRetweets => &self.min_retweets,
            Field::GenerateImages => "",
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Accounts => Some(&mut self.accounts),
            Field::TweetsToAnalyze => Some(&mut self.tweets_to_analyze),
            Field::TweetsToRewrite => Some(&mut self.tweets_to_rewrite),
            Field::MinLikes => Some(&mut self.min_likes),
            Field::MinRetweets => Some(&mut self.min_retweets),
            Field::GenerateImages => None,
        }
    }

    /// Turn the raw form into a request, or fail with the first problem.
    /// Pure: no network, no side effects.
    pub fn collect(&self) -> Result<GenerationRequest, GenerateError> {
        let accounts = normalize_accounts(&self.accounts);
        if accounts.is_empty() {
            return Err(GenerateError::accounts_required());
        }

        let settings = Settings {
            tweets_to_analyze: parse_setting("tweets_to_analyze", &self.tweets_to_analyze, 1)?,
            tweets_to_rewrite: parse_setting("tweets_to_rewrite", &self.tweets_to_rewrite, 1)?,
            min_likes: parse_setting("min_likes", &self.min_likes, 0)?,
            min_retweets: parse_setting("min_retweets", &self.min_retweets, 0)?,
            generate_images: self.generate_images,
        };

        Ok(GenerationRequest { accounts, settings })
    }
}

/// Split on line breaks, trim, strip one leading `@`, drop blanks.
/// Order is preserved and duplicates are kept; the service deduplicates
/// on its side if it cares to.
pub fn normalize_accounts(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim())
        .map(|line| line.strip_prefix('@').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// The service depends on meaningful thresholds, so a field that does not
/// parse is an error rather than a silent zero.
fn parse_setting(field: &'static str, raw: &str, min: u32) -> Result<u32, GenerateError> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| GenerateError::Validation(format!("{field} must be a whole number")))?;
    if value < min {
        return Err(GenerateError::Validation(format!(
            "{field} must be at least {min}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_accounts() {
        assert_eq!(
            normalize_accounts("  @alice\n\nbob \n@carol"),
            vec!["alice", "bob", "carol"]
        );
    }

    #[test]
    fn test_normalize_strips_single_at_only() {
        assert_eq!(normalize_accounts("@@weird"), vec!["@weird"]);
    }

    #[test]
    fn test_normalize_keeps_duplicates_in_order() {
        assert_eq!(normalize_accounts("a\nb\na"), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_collect_rejects_empty_accounts() {
        let form = FormState {
            accounts: "  \n @ \n".to_string(),
            ..FormState::default()
        };
        assert_eq!(form.collect(), Err(GenerateError::accounts_required()));
    }

    #[test]
    fn test_collect_rejects_non_numeric_setting() {
        let form = FormState {
            accounts: "alice".to_string(),
            min_likes: "lots".to_string(),
            ..FormState::default()
        };
        let err = form.collect().unwrap_err();
        assert_eq!(
            err,
            GenerateError::Validation("min_likes must be a whole number".to_string())
        );
    }

    #[test]
    fn test_collect_rejects_empty_setting() {
        let form = FormState {
            accounts: "alice".to_string(),
            tweets_to_analyze: String::new(),
            ..FormState::default()
        };
        assert!(matches!(
            form.collect(),
            Err(GenerateError::Validation(_))
        ));
    }

    #[test]
    fn test_collect_requires_positive_rewrite_count() {
        let form = FormState {
            accounts: "alice".to_string(),
            tweets_to_rewrite: "0".to_string(),
            ..FormState::default()
        };
        assert_eq!(
            form.collect(),
            Err(GenerateError::Validation(
                "tweets_to_rewrite must be at least 1".to_string()
            ))
        );
    }

    #[test]
    fn test_collect_allows_zero_thresholds() {
        let form = FormState {
            accounts: "alice".to_string(),
            min_likes: "0".to_string(),
            min_retweets: "0".to_string(),
            ..FormState::default()
        };
        let request = form.collect().unwrap();
        assert_eq!(request.settings.min_likes, 0);
        assert_eq!(request.settings.min_retweets, 0);
    }

    #[test]
    fn test_field_cycle_round_trips() {
        let mut field = Field::Accounts;
        for _ in 0..6 {
            field = field.next();
        }
        assert_eq!(field, Field::Accounts);
        assert_eq!(Field::Accounts.prev(), Field::GenerateImages);
    }
}
