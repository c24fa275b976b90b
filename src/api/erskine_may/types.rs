//! Erskine May models

use crate::pagination::{Page, PageRequest, Paginated};
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub part_number: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub part_number: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionOverview>,
}

/// Table-of-contents entry for a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOverview {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub title_chain: Option<String>,
    #[serde(default)]
    pub sub_sections: Vec<SectionOverview>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub title_chain: Option<String>,
    #[serde(default)]
    pub part_number: Option<u32>,
    #[serde(default)]
    pub part_title: Option<String>,
    #[serde(default)]
    pub chapter_number: Option<u32>,
    #[serde(default)]
    pub chapter_title: Option<String>,
    #[serde(default)]
    pub content_html: Option<String>,
    #[serde(default)]
    pub footnotes: Vec<Footnote>,
    #[serde(default)]
    pub is_updated: bool,
    #[serde(default, with = "crate::types::datetime::option")]
    pub updated_date: Option<Timestamp>,
    #[serde(default)]
    pub sub_sections: Vec<SectionOverview>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footnote {
    pub number: String,
    pub content: String,
}

/// Search response envelope shared by paragraph and section search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    pub search_term: String,
    #[serde(default)]
    pub search_terms: Vec<String>,
    pub total_results: u64,
    pub skip: u32,
    pub take: u32,
    pub search_results: Vec<T>,
    #[serde(default)]
    pub suggested_search: Option<String>,
}

impl<T> Paginated for SearchResults<T> {
    type Item = T;

    fn into_page(self, _request: &PageRequest) -> Page<T> {
        Page::with_total(self.search_results, self.total_results)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphSearchResult {
    pub section_id: u32,
    pub section_title: String,
    pub paragraph_reference: String,
    #[serde(default)]
    pub search_result_text: Option<String>,
    #[serde(default)]
    pub part_number: Option<u32>,
    #[serde(default)]
    pub chapter_number: Option<u32>,
    #[serde(default)]
    pub chapter_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSearchResult {
    pub section_id: u32,
    pub section_title: String,
    #[serde(default)]
    pub title_chain: Option<String>,
    #[serde(default)]
    pub part_number: Option<u32>,
    #[serde(default)]
    pub chapter_number: Option<u32>,
    #[serde(default)]
    pub chapter_title: Option<String>,
}
