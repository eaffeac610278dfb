use crate::types::LlmPricing;

// Prices are USD per million tokens. Speed is tokens per second where the vendor publishes it.

pub struct LlmEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub pricing_url: Option<&'static str>,
    pub models: &'static [ModelEntry],
}

pub struct ModelEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub versions: &'static [VersionEntry],
}

pub struct VersionEntry {
    pub name: &'static str,
    pub pricing: LlmPricing,
}

impl VersionEntry {
    const fn new(name: &'static str, input_price: f64, output_price: f64, speed: Option<u32>) -> Self {
        VersionEntry {
            name,
            pricing: LlmPricing {
                input_price,
                output_price,
                speed,
            },
        }
    }
}

pub static LLM_PROVIDERS: &[LlmEntry] = &[
    LlmEntry {
        id: "openai",
        name: "OpenAI",
        pricing_url: Some("https://openai.com/api/pricing/"),
        models: &[
            ModelEntry {
                id: "o1",
                name: "O1",
                versions: &[
                    VersionEntry::new("On-Demand", 15.0, 60.0, None),
                    VersionEntry::new("2024-12-17", 15.0, 60.0, None),
                    VersionEntry::new("preview", 15.0, 60.0, None),
                    VersionEntry::new("preview-2024-09-12", 15.0, 60.0, None),
                ],
            },
            ModelEntry {
                id: "gpt-4o",
                name: "GPT-4",
                versions: &[
                    VersionEntry::new("Default", 2.5, 10.0, None),
                    VersionEntry::new("20-11-2024", 2.5, 10.0, None),
                    VersionEntry::new("06-08-2024", 2.5, 10.0, None),
                    VersionEntry::new("Audio-Preview", 2.5, 10.0, None),
                    VersionEntry::new("Audio-Preview-2024-12-17", 2.5, 10.0, None),
                    VersionEntry::new("Audio-Preview-2024-10-01", 2.5, 10.0, None),
                ],
            },
            ModelEntry {
                id: "gpt-4o-2024-05-13",
                name: "GPT-4 (2024-05-13)",
                versions: &[
                    VersionEntry::new("Default", 5.0, 15.0, None),
                ],
            },
            ModelEntry {
                id: "gpt-4o-mini",
                name: "GPT-4 Mini",
                versions: &[
                    VersionEntry::new("Default", 0.15, 0.6, None),
                    VersionEntry::new("18-07-2024", 0.15, 0.6, None),
                    VersionEntry::new("Audio-Preview", 0.15, 0.6, None),
                    VersionEntry::new("Audio-Preview-2024-12-17", 0.15, 0.6, None),
                ],
            },
        ],
    },
    LlmEntry {
        id: "anthropic",
        name: "Anthropic",
        pricing_url: Some("https://www.anthropic.com/pricing#anthropic-api"),
        models: &[
            ModelEntry {
                id: "claude-3-5-sonnet",
                name: "Claude 3.5 Sonnet",
                versions: &[
                    VersionEntry::new("Default", 3.0, 15.0, None),
                ],
            },
            ModelEntry {
                id: "claude-3-5-haiku",
                name: "Claude 3.5 Haiku",
                versions: &[
                    VersionEntry::new("Default", 0.8, 4.0, None),
                ],
            },
            ModelEntry {
                id: "claude-3-opus",
                name: "Claude 3 Opus",
                versions: &[
                    VersionEntry::new("Default", 15.0, 75.0, None),
                ],
            },
        ],
    },
    LlmEntry {
        id: "aws-ai21",
        name: "AWS (AI21 Labs)",
        pricing_url: None,
        models: &[
            ModelEntry {
                id: "jamba-1-5-large",
                name: "Jamba 1.5 Large",
                versions: &[
                    VersionEntry::new("On-Demand", 2.0, 8.0, None),
                ],
            },
            ModelEntry {
                id: "jamba-1-5-mini",
                name: "Jamba 1.5 Mini",
                versions: &[
                    VersionEntry::new("On-Demand", 0.2, 0.4, None),
                ],
            },
            ModelEntry {
                id: "jurassic-2-mid",
                name: "Jurassic-2 Mid",
                versions: &[
                    VersionEntry::new("On-Demand", 12.5, 12.5, None),
                ],
            },
            ModelEntry {
                id: "jurassic-2-ultra",
                name: "Jurassic-2 Ultra",
                versions: &[
                    VersionEntry::new("On-Demand", 18.8, 18.8, None),
                ],
            },
        ],
    },
    LlmEntry {
        id: "aws-anthropic",
        name: "AWS (Anthropic)",
        pricing_url: None,
        models: &[
            ModelEntry {
                id: "claude-3-5-sonnet-aws",
                name: "Claude 3.5 Sonnet",
                versions: &[
                    VersionEntry::new("Default", 3.0, 15.0, None),
                ],
            },
            ModelEntry {
                id: "claude-3-5-haiku-aws",
                name: "Claude 3.5 Haiku",
                versions: &[
                    VersionEntry::new("Default", 0.8, 4.0, None),
                ],
            },
            ModelEntry {
                id: "claude-3-opus-aws",
                name: "Claude 3 Opus",
                versions: &[
                    VersionEntry::new("Default", 15.0, 75.0, None),
                ],
            },
            ModelEntry {
                id: "claude-3-haiku-aws",
                name: "Claude 3 Haiku",
                versions: &[
                    VersionEntry::new("Default", 0.25, 1.25, None),
                ],
            },
            ModelEntry {
                id: "claude-3-sonnet-aws",
                name: "Claude 3 Sonnet",
                versions: &[
                    VersionEntry::new("Default", 3.0, 15.0, None),
                ],
            },
        ],
    },
    LlmEntry {
        id: "aws-meta",
        name: "AWS (Meta)",
        pricing_url: None,
        models: &[
            ModelEntry {
                id: "llama-3-3-instruct-70b",
                name: "Llama 3.3 Instruct (70B)",
                versions: &[
                    VersionEntry::new("On-Demand", 0.72, 0.72, None),
                ],
            },
            ModelEntry {
                id: "llama-3-2-instruct-1b",
                name: "Llama 3.2 Instruct (1B)",
                versions: &[
                    VersionEntry::new("On-Demand", 0.1, 0.1, None),
                ],
            },
            ModelEntry {
                id: "llama-3-2-instruct-3b",
                name: "Llama 3.2 Instruct (3B)",
                versions: &[
                    VersionEntry::new("On-Demand", 0.15, 0.15, None),
                ],
            },
            ModelEntry {
                id: "llama-3-2-instruct-11b",
                name: "Llama 3.2 Instruct (11B)",
                versions: &[
                    VersionEntry::new("On-Demand", 0.16, 0.16, None),
                ],
            },
            ModelEntry {
                id: "llama-3-1-instruct-8b",
                name: "Llama 3.1 Instruct (8B)",
                versions: &[
                    VersionEntry::new("On-Demand", 0.22, 0.22, None),
                ],
            },
            ModelEntry {
                id: "llama-3-1-instruct-70b",
                name: "Llama 3.1 Instruct (70B)",
                versions: &[
                    VersionEntry::new("On-Demand", 0.72, 0.72, None),
                ],
            },
            ModelEntry {
                id: "llama-3-instruct-8b",
                name: "Llama 3 Instruct (8B)",
                versions: &[
                    VersionEntry::new("On-Demand", 0.3, 0.6, None),
                ],
            },
            ModelEntry {
                id: "llama-3-instruct-70b",
                name: "Llama 3 Instruct (70B)",
                versions: &[
                    VersionEntry::new("On-Demand", 2.65, 3.5, None),
                ],
            },
            ModelEntry {
                id: "llama-2-chat-13b",
                name: "Llama 2 Chat (13B)",
                versions: &[
                    VersionEntry::new("On-Demand", 0.75, 1.0, None),
                ],
            },
            ModelEntry {
                id: "llama-2-chat-70b",
                name: "Llama 2 Chat (70B)",
                versions: &[
                    VersionEntry::new("On-Demand", 1.95, 2.56, None),
                ],
            },
        ],
    },
    LlmEntry {
        id: "groq",
        name: "Groq",
        pricing_url: Some("https://groq.com/pricing/"),
        models: &[
            ModelEntry {
                id: "llama-3-2-1b",
                name: "Llama 3.2 1B (Preview) 8k",
                versions: &[
                    VersionEntry::new("Default", 0.04, 0.04, Some(3100)),
                ],
            },
            ModelEntry {
                id: "llama-3-2-3b",
                name: "Llama 3.2 3B (Preview) 8k",
                versions: &[
                    VersionEntry::new("Default", 0.06, 0.06, Some(1600)),
                ],
            },
            ModelEntry {
                id: "llama-3-3-70b",
                name: "Llama 3.3 70B Versatile 128k",
                versions: &[
                    VersionEntry::new("Default", 0.59, 0.79, Some(275)),
                ],
            },
            ModelEntry {
                id: "llama-3-1-8b",
                name: "Llama 3.1 8B Instant 128k",
                versions: &[
                    VersionEntry::new("Default", 0.05, 0.08, Some(750)),
                ],
            },
            ModelEntry {
                id: "mixtral-8x7b",
                name: "Mixtral 8x7B Instruct 32k",
                versions: &[
                    VersionEntry::new("Default", 0.24, 0.24, Some(575)),
                ],
            },
            ModelEntry {
                id: "gemma-7b",
                name: "Gemma 7B 8k Instruct",
                versions: &[
                    VersionEntry::new("Default", 0.07, 0.07, Some(950)),
                ],
            },
            ModelEntry {
                id: "gemma-2-9b",
                name: "Gemma 2 9B 8k",
                versions: &[
                    VersionEntry::new("Default", 0.2, 0.2, Some(500)),
                ],
            },
        ],
    },
    LlmEntry {
        id: "aws",
        name: "AWS Bedrock",
        pricing_url: Some("https://aws.amazon.com/bedrock/pricing/"),
        models: &[],
    },
];
