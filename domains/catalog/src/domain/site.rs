//! Site-wide configuration from `content/site-config.json`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub title: String,
    pub url: String,
    pub description: String,
    pub author: String,
    pub email: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Jolene Casko".to_string(),
            url: "https://jolene.taurustech.me".to_string(),
            description: "Surreal digital collages inspired by music, poetry, and emotion. \
                          Specializing in album art for musicians."
                .to_string(),
            author: "Jolene Casko".to_string(),
            email: "jolenecasko@gmail.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoInfo {
    pub twitter_handle: String,
}

impl Default for SeoInfo {
    fn default() -> Self {
        Self {
            twitter_handle: "@jolenecasko".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: Option<String>,
    pub behance: Option<String>,
    pub foundation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub seo: SeoInfo,
    pub social: SocialLinks,
}

impl SiteConfig {
    /// Profile links for `sameAs` in structured data
    pub fn profile_links(&self) -> Vec<&str> {
        [&self.social.instagram, &self.social.behance, &self.social.foundation]
            .into_iter()
            .filter_map(|link| link.as_deref())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"site": {"title": "Studio"}, "seo": {}}"#).unwrap();
        assert_eq!(config.site.title, "Studio");
        assert_eq!(config.site.author, "Jolene Casko");
        assert_eq!(config.seo.twitter_handle, "@jolenecasko");
        assert!(config.profile_links().is_empty());
    }

    #[test]
    fn test_profile_links_skip_missing() {
        let config: SiteConfig = serde_json::from_str(
            r#"{"social": {"instagram": "https://www.instagram.com/jolenecasko/"}}"#,
        )
        .unwrap();
        assert_eq!(
            config.profile_links(),
            vec!["https://www.instagram.com/jolenecasko/"]
        );
    }
}
