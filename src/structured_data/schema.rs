//! schema.org JSON-LD objects: Article, BreadcrumbList and FAQPage.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::faq::FaqEntry;
use crate::article::Article;
use crate::config::RenderConfig;
use crate::content_renderer::headings::slugify;
use crate::content_renderer::html_preprocessing::strip_legacy_toc;
use crate::utils::{plain_text, truncate_at_word_boundary};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Article fields the schema objects are built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleMetadata<'a> {
    pub title: &'a str,
    pub description: String,
    pub image: Option<&'a str>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub slug: &'a str,
    pub category: &'a str,
    pub word_count: usize,
}

impl<'a> ArticleMetadata<'a> {
    /// Collect metadata for `article`.
    ///
    /// `body_html` is the normalized body; it is only read when the excerpt is
    /// blank and a description has to be derived from the text.
    #[must_use]
    pub fn from_article(
        article: &'a Article,
        body_html: &str,
        word_count: usize,
        config: &RenderConfig,
    ) -> Self {
        let description = match article.trimmed_excerpt() {
            Some(excerpt) => excerpt.to_string(),
            None => derive_description(body_html, config.description_max_chars()),
        };

        Self {
            title: article.title.trim(),
            description,
            image: article.hero_image().map(str::trim),
            published_at: article.published_at,
            updated_at: article.updated_at,
            slug: &article.slug,
            category: article.category.trim(),
            word_count,
        }
    }
}

/// Leading body text cut at a word boundary.
fn derive_description(body_html: &str, max_chars: usize) -> String {
    let text = plain_text(&strip_legacy_toc(body_html));
    truncate_at_word_boundary(&text, max_chars).to_string()
}

fn schema_date(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub date_published: String,
    pub date_modified: String,
    pub author: Organization,
    pub publisher: Organization,
    pub main_entity_of_page: WebPage,
    pub article_section: String,
    pub in_language: String,
    pub word_count: usize,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub main_entity: Vec<Question>,
}

/// Structured data for one render. `faq` is absent, not empty, when the body
/// has no FAQ section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredDataBundle {
    pub article: ArticleSchema,
    pub breadcrumb: BreadcrumbSchema,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<FaqSchema>,
}

impl StructuredDataBundle {
    /// One `<script type="application/ld+json">` per present object.
    ///
    /// `</` inside strings is written as `<\/` so article text can never close
    /// the script element early.
    pub fn to_script_tags(&self) -> serde_json::Result<String> {
        let mut html = script_tag(&self.article)?;
        html.push_str(&script_tag(&self.breadcrumb)?);
        if let Some(faq) = &self.faq {
            html.push_str(&script_tag(faq)?);
        }
        Ok(html)
    }
}

fn script_tag<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let json = serde_json::to_string(value)?.replace("</", "<\\/");
    Ok(format!("<script type=\"application/ld+json\">{json}</script>"))
}

fn organization(config: &RenderConfig) -> Organization {
    Organization {
        kind: "Organization",
        name: config.site_name().to_string(),
        url: config.home_url(),
        logo: config.logo_url().map(|url| ImageObject {
            kind: "ImageObject",
            url: url.to_string(),
        }),
    }
}

fn article_schema(meta: &ArticleMetadata<'_>, config: &RenderConfig) -> ArticleSchema {
    let url = config.article_url(meta.slug);
    ArticleSchema {
        context: SCHEMA_CONTEXT,
        kind: "Article",
        headline: meta.title.to_string(),
        description: meta.description.clone(),
        image: meta.image.map(str::to_string),
        date_published: schema_date(&meta.published_at),
        date_modified: schema_date(&meta.updated_at),
        author: organization(config),
        publisher: organization(config),
        main_entity_of_page: WebPage {
            kind: "WebPage",
            id: url.clone(),
        },
        article_section: meta.category.to_string(),
        in_language: config.language().to_string(),
        word_count: meta.word_count,
        url,
    }
}

fn breadcrumb_schema(meta: &ArticleMetadata<'_>, config: &RenderConfig) -> BreadcrumbSchema {
    let mut trail = vec![(config.home_label().to_string(), config.home_url())];
    let category_slug = slugify(meta.category);
    if !category_slug.is_empty() {
        trail.push((meta.category.to_string(), config.category_url(&category_slug)));
    }
    trail.push((meta.title.to_string(), config.article_url(meta.slug)));

    BreadcrumbSchema {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        item_list_element: trail
            .into_iter()
            .enumerate()
            .map(|(i, (name, item))| ListItem {
                kind: "ListItem",
                position: i + 1,
                name,
                item,
            })
            .collect(),
    }
}

fn faq_schema(entries: &[FaqEntry]) -> FaqSchema {
    FaqSchema {
        context: SCHEMA_CONTEXT,
        kind: "FAQPage",
        main_entity: entries
            .iter()
            .map(|entry| Question {
                kind: "Question",
                name: entry.question.clone(),
                accepted_answer: Answer {
                    kind: "Answer",
                    text: entry.answer.clone(),
                },
            })
            .collect(),
    }
}

/// Build the Article, Breadcrumb and (when entries exist) FAQPage objects.
#[must_use]
pub fn assemble_structured_data(
    meta: &ArticleMetadata<'_>,
    faq: Option<&[FaqEntry]>,
    config: &RenderConfig,
) -> StructuredDataBundle {
    StructuredDataBundle {
        article: article_schema(meta, config),
        breadcrumb: breadcrumb_schema(meta, config),
        faq: faq.filter(|entries| !entries.is_empty()).map(faq_schema),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(excerpt: Option<&str>) -> Article {
        Article {
            content: "<p>Пълнолунието носи яснота.</p>".to_string(),
            title: "Пълнолуние през октомври".to_string(),
            excerpt: excerpt.map(str::to_string),
            category: "Астрология".to_string(),
            slug: "palnolunie-oktomvri".to_string(),
            image_urls: vec!["https://cdn.vrachka.eu/moon.jpg".to_string()],
            published_at: Utc.with_ymd_and_hms(2026, 10, 1, 8, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 10, 2, 9, 0, 0).unwrap(),
        }
    }

    fn config() -> RenderConfig {
        RenderConfig::builder()
            .site_url("https://vrachka.eu/")
            .logo_url("https://vrachka.eu/logo.png")
            .build()
            .expect("valid config")
    }

    #[test]
    fn article_schema_fields() {
        let article = article(Some("  Кратко описание  "));
        let config = config();
        let meta = ArticleMetadata::from_article(&article, &article.content, 4, &config);
        let bundle = assemble_structured_data(&meta, None, &config);
        let json = serde_json::to_value(&bundle.article).expect("article serializes");

        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "Article");
        assert_eq!(json["headline"], "Пълнолуние през октомври");
        assert_eq!(json["description"], "Кратко описание");
        assert_eq!(json["image"], "https://cdn.vrachka.eu/moon.jpg");
        assert_eq!(json["datePublished"], "2026-10-01T08:30:00Z");
        assert_eq!(json["dateModified"], "2026-10-02T09:00:00Z");
        assert_eq!(json["url"], "https://vrachka.eu/blog/palnolunie-oktomvri");
        assert_eq!(json["mainEntityOfPage"]["@id"], json["url"]);
        assert_eq!(json["publisher"]["logo"]["url"], "https://vrachka.eu/logo.png");
        assert_eq!(json["articleSection"], "Астрология");
        assert_eq!(json["inLanguage"], "bg");
        assert_eq!(json["wordCount"], 4);
    }

    #[test]
    fn blank_excerpt_derives_description_from_body() {
        let article = article(Some("   "));
        let config = RenderConfig::builder()
            .site_url("https://vrachka.eu")
            .description_max_chars(20)
            .build()
            .expect("valid config");
        let meta = ArticleMetadata::from_article(&article, &article.content, 4, &config);
        assert_eq!(meta.description, "Пълнолунието носи");
    }

    #[test]
    fn breadcrumb_runs_home_category_article() {
        let article = article(None);
        let config = config();
        let meta = ArticleMetadata::from_article(&article, &article.content, 4, &config);
        let json = serde_json::to_value(assemble_structured_data(&meta, None, &config).breadcrumb)
            .expect("breadcrumb serializes");

        let items = json["itemListElement"].as_array().expect("item list");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["name"], "Начало");
        assert_eq!(items[0]["item"], "https://vrachka.eu/");
        assert_eq!(items[1]["item"], "https://vrachka.eu/blog/category/astrologiya");
        assert_eq!(items[2]["position"], 3);
        assert_eq!(items[2]["item"], "https://vrachka.eu/blog/palnolunie-oktomvri");
    }

    #[test]
    fn faq_key_present_only_with_entries() {
        let article = article(None);
        let config = config();
        let meta = ArticleMetadata::from_article(&article, &article.content, 4, &config);

        let without = serde_json::to_value(assemble_structured_data(&meta, Some(&[] as &[FaqEntry]), &config))
            .expect("bundle serializes");
        assert!(without.get("faq").is_none());

        let entries = [FaqEntry {
            question: "Кога?".to_string(),
            answer: "Утре.".to_string(),
        }];
        let with = serde_json::to_value(assemble_structured_data(&meta, Some(entries.as_slice()), &config))
            .expect("bundle serializes");
        assert_eq!(with["faq"]["@type"], "FAQPage");
        assert_eq!(with["faq"]["mainEntity"][0]["acceptedAnswer"]["text"], "Утре.");
    }

    #[test]
    fn script_tags_escape_closing_sequences() {
        let mut article = article(Some("</script><script>alert(1)</script>"));
        article.title = "Заглавие".to_string();
        let config = config();
        let meta = ArticleMetadata::from_article(&article, &article.content, 4, &config);
        let tags = assemble_structured_data(&meta, None, &config)
            .to_script_tags()
            .expect("bundle serializes");

        assert_eq!(tags.matches("<script type=\"application/ld+json\">").count(), 2);
        assert_eq!(tags.matches("</script>").count(), 2);
        assert!(tags.contains("<\\/script>"));
    }
}
