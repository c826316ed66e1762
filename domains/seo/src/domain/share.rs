//! Social share links

use std::str::FromStr;

use url::Url;

/// Account credited in tweet intents
pub const TWITTER_VIA: &str = "jolenecasko";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    Pinterest,
    LinkedIn,
    Email,
}

impl FromStr for SharePlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facebook" => Ok(SharePlatform::Facebook),
            "twitter" => Ok(SharePlatform::Twitter),
            "pinterest" => Ok(SharePlatform::Pinterest),
            "linkedin" => Ok(SharePlatform::LinkedIn),
            "email" => Ok(SharePlatform::Email),
            other => Err(format!("Unknown share platform: {}", other)),
        }
    }
}

fn with_query(base: &str, pairs: &[(&str, &str)]) -> String {
    match Url::parse(base) {
        Ok(mut url) => {
            url.query_pairs_mut().extend_pairs(pairs);
            url.to_string()
        }
        Err(_) => base.to_string(),
    }
}

/// Share link for `page_url` titled `title`.
/// Unknown platforms fall back to the page URL itself.
pub fn share_url(platform: &str, page_url: &str, title: &str) -> String {
    let Ok(platform) = platform.parse::<SharePlatform>() else {
        return page_url.to_string();
    };

    match platform {
        SharePlatform::Facebook => {
            with_query("https://www.facebook.com/sharer/sharer.php", &[("u", page_url)])
        }
        SharePlatform::Twitter => with_query(
            "https://twitter.com/intent/tweet",
            &[("url", page_url), ("text", title), ("via", TWITTER_VIA)],
        ),
        SharePlatform::Pinterest => with_query(
            "https://pinterest.com/pin/create/button/",
            &[("url", page_url), ("description", title)],
        ),
        SharePlatform::LinkedIn => with_query(
            "https://www.linkedin.com/sharing/share-offsite/",
            &[("url", page_url)],
        ),
        SharePlatform::Email => {
            let body = format!("Check out this artwork: {}", page_url);
            with_query("mailto:", &[("subject", title), ("body", &body)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://example.com/shop.html?artwork=moon";

    #[test]
    fn test_facebook_encodes_page_url() {
        assert_eq!(
            share_url("facebook", PAGE, "Shop"),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.com%2Fshop.html%3Fartwork%3Dmoon"
        );
    }

    #[test]
    fn test_twitter_credits_artist() {
        let link = Url::parse(&share_url("twitter", PAGE, "Moon & Tide")).unwrap();
        let pairs: Vec<(String, String)> = link.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("url".to_string(), PAGE.to_string()),
                ("text".to_string(), "Moon & Tide".to_string()),
                ("via".to_string(), "jolenecasko".to_string()),
            ]
        );
    }

    #[test]
    fn test_email_link() {
        let link = share_url("email", PAGE, "Moon");
        assert!(link.starts_with("mailto:?subject=Moon&body=Check+out+this+artwork"));
    }

    #[test]
    fn test_unknown_platform_returns_page() {
        assert_eq!(share_url("myspace", PAGE, "Moon"), PAGE);
    }
}
