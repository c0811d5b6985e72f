//! Listing prompt composition.
//!
//! Assembles the four template fields into one directive document for an
//! external text generator. Field text is inserted verbatim: nothing is
//! escaped, trimmed or truncated inside the document.

#![allow(dead_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

pub const ROLE_HEADER: &str = "# [SYSTEM ROLE]:";
pub const GOAL_HEADER: &str = "# [GOAL]:";
pub const RULES_HEADER: &str = "# [OPERATIONAL RULES]:";
pub const FORMAT_HEADER: &str = "# [OUTPUT FORMAT]:";
pub const PRODUCT_DATA_HEADER: &str = "# [TARGET PRODUCT DATA]:";

/// Instruction left under the product data header for the seller to replace.
pub const PRODUCT_DATA_PLACEHOLDER: &str =
    "(여기에 크롤링한 상품명, 원문 설명, 가격 등의 데이터를 붙여넣으세요)";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplateConfig {
    pub role: String,
    pub goal: String,
    pub rules: String,
    pub structure: String,
}

impl Default for PromptTemplateConfig {
    /// Naver smart store listing preset.
    fn default() -> Self {
        Self {
            role: "네이버 스마트스토어 전문 구매대행 MD".to_string(),
            goal: "해외 쇼핑몰의 원본 상품 데이터를 분석하여 국내 정서에 맞는 프리미엄 상세페이지와 SEO 키워드를 생성하라.".to_string(),
            rules: [
                "- 번역체 지양: '너의 삶을 풍요롭게' 대신 '일상의 질을 높여주는' 등 자연스러운 한국어 사용",
                "- 국내 검색 최적화: 쿠팡/네이버 인기 키워드 상위 5개를 제목 전면에 배치",
                "- 신뢰도 강화: 관부가세 포함 여부 및 개인통관고유부호 필요 안내 문구 포함",
                "- 마진 방어: 소싱 가격 대비 1.5배 이상의 가치가 느껴지도록 스토리텔링",
            ]
            .join("\n"),
            structure: [
                "1. [SEO 최적화 상품명]",
                "2. [감성 소구 카피 (3문장)]",
                "3. [상세 스펙 한글화 테이블]",
                "4. [배송 가이드: 현지 배송-항공-통관-국내 배송]",
                "5. [연관 검색 태그 10개]",
            ]
            .join("\n"),
        }
    }
}

impl PromptTemplateConfig {
    pub fn empty() -> Self {
        Self {
            role: String::new(),
            goal: String::new(),
            rules: String::new(),
            structure: String::new(),
        }
    }
}

/// The assembled prompt document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComposedPrompt(String);

impl ComposedPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for ComposedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn compose_prompt(config: &PromptTemplateConfig) -> ComposedPrompt {
    let document = format!(
        "{ROLE_HEADER} {role}\n\
         {GOAL_HEADER} {goal}\n\
         \n\
         {RULES_HEADER}\n\
         {rules}\n\
         \n\
         {FORMAT_HEADER}\n\
         {structure}\n\
         \n\
         {PRODUCT_DATA_HEADER}\n\
         {PRODUCT_DATA_PLACEHOLDER}",
        role = config.role,
        goal = config.goal,
        rules = config.rules,
        structure = config.structure,
    );

    ComposedPrompt(trim_document(&document).to_string())
}

fn trim_document(document: &str) -> &str {
    document.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
}
