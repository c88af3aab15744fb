/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Static copy for every section of the page.
//!
//! Content is plain configuration: it is deserialised once, validated, and
//! rendered verbatim. A default set ships with the crate
//! (`content/site.json`); deployments may supply their own.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUNDLED_CONTENT: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site content: {0}")]
    Invalid(String),
}

/// Sections the navigation can jump to.
///
/// The ids are part of the page's public interface: external links point at
/// `#features`, `#how`, `#pricing` and `#faq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionAnchor {
    Features,
    How,
    Pricing,
    Faq,
}

impl SectionAnchor {
    pub const ALL: [SectionAnchor; 4] = [
        SectionAnchor::Features,
        SectionAnchor::How,
        SectionAnchor::Pricing,
        SectionAnchor::Faq,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionAnchor::Features => "features",
            SectionAnchor::How => "how",
            SectionAnchor::Pricing => "pricing",
            SectionAnchor::Faq => "faq",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Glyphs the page knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Zap,
    Shield,
    Sparkles,
    TrendingUp,
    Github,
    Twitter,
    Linkedin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub badge: Option<String>,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub target: SectionAnchor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub headline: String,
    pub lead: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoCloud {
    pub caption: String,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: Glyph,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSection {
    pub badge: String,
    pub heading: String,
    pub lead: String,
    pub chart: Vec<ChartPoint>,
    pub chart_caption: String,
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub checklist: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepsSection {
    pub heading: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialSection {
    pub heading: String,
    pub quotes: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    pub cta: String,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSection {
    pub heading: String,
    pub lead: String,
    pub tiers: Vec<PricingTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqSection {
    pub heading: String,
    pub entries: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterCopy {
    pub heading: String,
    pub lead: String,
    pub placeholder: String,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: Glyph,
    #[serde(default = "placeholder_href")]
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub blurb: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub columns: Vec<FooterColumn>,
    #[serde(default)]
    pub legal: Vec<String>,
}

fn placeholder_href() -> String {
    "#".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavItem>,
    pub hero: Hero,
    pub logo_cloud: LogoCloud,
    pub features: FeatureSection,
    pub how_it_works: StepsSection,
    pub testimonials: TestimonialSection,
    pub pricing: PricingSection,
    pub faq: FaqSection,
    pub newsletter: NewsletterCopy,
    pub footer: Footer,
}

impl SiteContent {
    /// The content shipped with the crate.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Like [`SiteContent::from_json`], for content already decoded into a
    /// JSON tree (a runtime override, say).
    pub fn from_value(value: serde_json::Value) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_value(value)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.brand.name.trim().is_empty() {
            return Err(ContentError::Invalid("brand name is empty".into()));
        }
        if self.nav.is_empty() {
            return Err(ContentError::Invalid("navigation has no items".into()));
        }
        if self.faq.entries.is_empty() {
            return Err(ContentError::Invalid("faq has no entries".into()));
        }

        let highlighted = self.pricing.tiers.iter().filter(|t| t.highlighted).count();
        if highlighted > 1 {
            return Err(ContentError::Invalid(format!(
                "{highlighted} pricing tiers are highlighted, at most one is allowed"
            )));
        }
        let mut names = HashSet::new();
        for tier in &self.pricing.tiers {
            if !names.insert(tier.name.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate pricing tier {:?}",
                    tier.name
                )));
            }
        }

        if let Some(point) = self
            .features
            .chart
            .iter()
            .find(|p| !p.value.is_finite() || p.value < 0.0)
        {
            return Err(ContentError::Invalid(format!(
                "chart point {:?} has value {}",
                point.name, point.value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled_json() -> serde_json::Value {
        serde_json::from_str(BUNDLED_CONTENT).unwrap()
    }

    #[test]
    fn bundled_content_is_valid() {
        let content = SiteContent::bundled().unwrap();
        assert_eq!(content.brand.name, "Acme");
        assert_eq!(content.features.items.len(), 4);
        assert_eq!(content.pricing.tiers.len(), 3);
        assert_eq!(content.faq.entries.len(), 3);
        assert_eq!(content.footer.columns.len(), 3);
    }

    #[test]
    fn nav_targets_cover_every_anchor_in_order() {
        let content = SiteContent::bundled().unwrap();
        let targets: Vec<_> = content.nav.iter().map(|n| n.target).collect();
        assert_eq!(targets, SectionAnchor::ALL.to_vec());
        assert_eq!(SectionAnchor::How.href(), "#how");
    }

    #[test]
    fn exactly_one_tier_is_highlighted_by_default() {
        let content = SiteContent::bundled().unwrap();
        let highlighted: Vec<_> = content
            .pricing
            .tiers
            .iter()
            .filter(|t| t.highlighted)
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(highlighted, vec!["Pro"]);
    }

    #[test]
    fn unknown_anchor_is_a_parse_error() {
        let mut json = bundled_json();
        json["nav"][0]["target"] = "blog".into();
        let err = SiteContent::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn two_highlighted_tiers_are_rejected() {
        let mut json = bundled_json();
        json["pricing"]["tiers"][0]["highlighted"] = true.into();
        let err = SiteContent::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(_)), "{err}");
    }

    #[test]
    fn duplicate_tier_names_are_rejected() {
        let mut json = bundled_json();
        json["pricing"]["tiers"][1]["name"] = "Starter".into();
        assert!(matches!(
            SiteContent::from_json(&json.to_string()),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn negative_chart_values_are_rejected() {
        let mut json = bundled_json();
        json["features"]["chart"][2]["value"] = (-1.0).into();
        assert!(matches!(
            SiteContent::from_json(&json.to_string()),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn empty_faq_is_rejected() {
        let mut json = bundled_json();
        json["faq"]["entries"] = serde_json::Value::Array(vec![]);
        assert!(SiteContent::from_json(&json.to_string()).is_err());
    }

    #[test]
    fn optional_fields_have_defaults() {
        let mut json = bundled_json();
        json["brand"].as_object_mut().unwrap().remove("badge");
        json["footer"]["socials"][0]
            .as_object_mut()
            .unwrap()
            .remove("href");
        let content = SiteContent::from_json(&json.to_string()).unwrap();
        assert_eq!(content.brand.badge, None);
        assert_eq!(content.footer.socials[0].href, "#");
    }

    #[test]
    fn decoded_tree_is_parsed_and_validated() {
        assert_eq!(
            SiteContent::from_value(bundled_json()).unwrap(),
            SiteContent::bundled().unwrap()
        );

        let mut json = bundled_json();
        json["brand"] = 42.into();
        assert!(matches!(
            SiteContent::from_value(json),
            Err(ContentError::Parse(_))
        ));
    }
}
