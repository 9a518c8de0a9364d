// src/templates.rs
// Canned advisory responses returned by the chat endpoint

use crate::models::{ChatResponse, MessageType, TableData, TableRow};

#[derive(Debug)]
pub struct TemplateRow {
    pub label: &'static str,
    pub values: &'static [&'static str],
    pub highlight: Option<bool>,
}

#[derive(Debug)]
pub struct TemplateTable {
    pub headers: &'static [&'static str],
    pub rows: &'static [TemplateRow],
}

/// A compiled-in chat payload. Optional fields are filled with their
/// envelope defaults by [`ResponseTemplate::to_response`].
#[derive(Debug)]
pub struct ResponseTemplate {
    pub message_type: MessageType,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub content: &'static str,
    pub actions: &'static [&'static str],
    pub how_it_works: Option<&'static [&'static str]>,
    pub how_to_setup: Option<&'static str>,
    pub savings: Option<&'static str>,
    pub table_data: Option<TemplateTable>,
}

impl ResponseTemplate {
    pub fn to_response(&self) -> ChatResponse {
        ChatResponse {
            response: self.content.to_string(),
            message_type: self.message_type,
            title: self.title.to_string(),
            subtitle: self.subtitle.unwrap_or_default().to_string(),
            actions: to_owned_list(self.actions),
            table_data: self.table_data.as_ref().map(|table| TableData {
                headers: to_owned_list(table.headers),
                rows: table
                    .rows
                    .iter()
                    .map(|row| TableRow {
                        label: row.label.to_string(),
                        values: to_owned_list(row.values),
                        highlight: row.highlight,
                    })
                    .collect(),
            }),
            how_it_works: self.how_it_works.map(to_owned_list).unwrap_or_default(),
            how_to_setup: self.how_to_setup.unwrap_or_default().to_string(),
            savings: self.savings.unwrap_or_default().to_string(),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKey {
    CrutExplanation,
    CrutPositive,
    CrutNegative,
    General,
}

impl TemplateKey {
    pub fn template(self) -> &'static ResponseTemplate {
        match self {
            TemplateKey::CrutExplanation => &CRUT_EXPLANATION,
            TemplateKey::CrutPositive => &CRUT_POSITIVE,
            TemplateKey::CrutNegative => &CRUT_NEGATIVE,
            TemplateKey::General => &GENERAL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKey::CrutExplanation => "crut_explanation",
            TemplateKey::CrutPositive => "crut_positive",
            TemplateKey::CrutNegative => "crut_negative",
            TemplateKey::General => "general",
        }
    }
}

pub const GENERAL_RESPONSE: &str = "I can help you explore charitable giving and tax planning strategies. \
Try asking \"What is a CRUT?\", \"Is a CRUT the right strategy for me?\" or ask me to analyze CRUT viability for your assets.";

pub static CRUT_EXPLANATION: ResponseTemplate = ResponseTemplate {
    message_type: MessageType::LongAnswer,
    title: "What is a Charitable Remainder Unitrust (CRUT)?",
    subtitle: Some("A tax-efficient way to give and receive income"),
    content: "A Charitable Remainder Unitrust (CRUT) is an irrevocable trust that pays you, or other \
named beneficiaries, a fixed percentage of the trust's value each year. The percentage must be at least 5% \
and no more than 50% of the trust assets, revalued annually. When the trust term ends, whatever remains \
passes to one or more charities you choose. Because appreciated assets can be sold inside the trust \
without immediate capital gains tax, a CRUT lets you diversify concentrated positions, generate income \
and receive a partial income tax deduction in the year you fund it.",
    actions: &[
        "Analyze CRUT viability",
        "Compare with a charitable gift annuity",
        "Talk to an advisor",
    ],
    how_it_works: Some(&[
        "You transfer appreciated assets such as stock or real estate into the trust.",
        "The trust sells the assets without triggering immediate capital gains tax.",
        "You receive an annual payout based on a fixed percentage of the trust's value.",
        "You take an income tax deduction for the present value of the charitable remainder.",
        "At the end of the term, the remaining assets go to your chosen charities.",
    ]),
    how_to_setup: Some("Work with an estate planning attorney to draft the trust document, \
choose a trustee and payout rate, obtain a qualified appraisal for non-cash assets, \
then retitle the assets into the trust's name."),
    savings: None,
    table_data: None,
};

pub static CRUT_POSITIVE: ResponseTemplate = ResponseTemplate {
    message_type: MessageType::TablePositive,
    title: "A CRUT looks like a strong fit",
    subtitle: Some("Based on a $2,000,000 appreciated asset with a $400,000 cost basis"),
    content: "Funding a CRUT with your appreciated asset avoids an immediate capital gains bill, \
produces a lifetime income stream and provides a sizable charitable deduction. \
Compared with selling the asset outright, more of your wealth stays invested and working for you.",
    actions: &[
        "Download the full analysis",
        "Schedule a consultation",
        "Adjust the payout rate",
    ],
    how_it_works: None,
    how_to_setup: None,
    savings: Some("Estimated tax savings of $412,000"),
    table_data: Some(TemplateTable {
        headers: &["", "Sell outright", "Fund a CRUT"],
        rows: &[
            TemplateRow {
                label: "Capital gains tax due",
                values: &["$380,800", "$0"],
                highlight: Some(true),
            },
            TemplateRow {
                label: "Amount reinvested",
                values: &["$1,619,200", "$2,000,000"],
                highlight: None,
            },
            TemplateRow {
                label: "Charitable deduction",
                values: &["$0", "$624,000"],
                highlight: Some(true),
            },
            TemplateRow {
                label: "Estimated annual income",
                values: &["$80,968", "$100,000"],
                highlight: None,
            },
        ],
    }),
};

pub static CRUT_NEGATIVE: ResponseTemplate = ResponseTemplate {
    message_type: MessageType::TableNegative,
    title: "A CRUT may not be the right fit",
    subtitle: Some("Based on your current assets and income needs"),
    content: "With a low-appreciation asset and a need for access to principal, the trust's \
irrevocable structure and setup costs outweigh its tax benefits. A donor-advised fund or \
direct gifts could meet your charitable goals with more flexibility.",
    actions: &[
        "Explore a donor-advised fund",
        "Review alternative strategies",
        "Talk to an advisor",
    ],
    how_it_works: None,
    how_to_setup: None,
    savings: Some("Estimated tax savings of $6,500"),
    table_data: Some(TemplateTable {
        headers: &["", "Sell outright", "Fund a CRUT"],
        rows: &[
            TemplateRow {
                label: "Capital gains tax due",
                values: &["$9,500", "$0"],
                highlight: None,
            },
            TemplateRow {
                label: "Setup and annual trustee costs",
                values: &["$0", "$12,000"],
                highlight: Some(true),
            },
            TemplateRow {
                label: "Access to principal",
                values: &["Full", "None"],
                highlight: Some(true),
            },
            TemplateRow {
                label: "Estimated annual income",
                values: &["$11,800", "$12,500"],
                highlight: None,
            },
        ],
    }),
};

pub static GENERAL: ResponseTemplate = ResponseTemplate {
    message_type: MessageType::Text,
    title: "Planning Assistant",
    subtitle: None,
    content: GENERAL_RESPONSE,
    actions: &["What is a CRUT?", "Analyze CRUT viability"],
    how_it_works: None,
    how_to_setup: None,
    savings: None,
    table_data: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_template_fills_envelope_defaults() {
        let response = GENERAL.to_response();
        assert_eq!(response.message_type, MessageType::Text);
        assert_eq!(response.response, GENERAL_RESPONSE);
        assert_eq!(response.subtitle, "");
        assert!(response.table_data.is_none());
        assert!(response.how_it_works.is_empty());
        assert_eq!(response.how_to_setup, "");
        assert_eq!(response.savings, "");
    }

    #[test]
    fn table_templates_keep_row_order() {
        let table = CRUT_POSITIVE.to_response().table_data.unwrap();
        assert_eq!(table.headers.len(), 3);
        assert_eq!(table.rows[0].label, "Capital gains tax due");
        assert_eq!(table.rows[0].highlight, Some(true));
        assert_eq!(table.rows[1].highlight, None);
        for row in &table.rows {
            assert_eq!(row.values.len(), table.headers.len() - 1);
        }
    }

    #[test]
    fn every_key_resolves_to_matching_type() {
        let cases = [
            (TemplateKey::CrutExplanation, MessageType::LongAnswer),
            (TemplateKey::CrutPositive, MessageType::TablePositive),
            (TemplateKey::CrutNegative, MessageType::TableNegative),
            (TemplateKey::General, MessageType::Text),
        ];
        for (key, expected) in cases {
            assert_eq!(key.template().message_type, expected, "{}", key.as_str());
        }
    }

    #[test]
    fn explanation_lists_steps_in_order() {
        let response = CRUT_EXPLANATION.to_response();
        assert_eq!(response.how_it_works.len(), 5);
        assert!(response.how_it_works[0].starts_with("You transfer"));
        assert!(!response.how_to_setup.is_empty());
    }
}
