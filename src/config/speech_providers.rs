use crate::types::RateTier;

/// Built-in speech-to-text entry. Prices are USD per minute.
pub struct SpeechEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub group: Option<&'static str>,
    pub pricing_url: &'static str,
    pub tiers: &'static [RateTier],
}

const DEEPGRAM_URL: &str = "https://deepgram.com/pricing";
const GROQ_URL: &str = "https://groq.com/pricing/";

pub static SPEECH_PROVIDERS: &[SpeechEntry] = &[
    SpeechEntry {
        id: "aws",
        name: "AWS",
        description: "Amazon Web Services Transcription",
        group: None,
        pricing_url: "https://aws.amazon.com/transcribe/pricing/",
        tiers: &[
            RateTier::new(0.0, 0.024),
            RateTier::new(250_000.0, 0.015),
            RateTier::new(1_000_000.0, 0.012),
        ],
    },
    SpeechEntry {
        id: "gcp",
        name: "Google Cloud",
        description: "Google Speech-to-Text Standard Recognition",
        group: None,
        pricing_url: "https://cloud.google.com/speech-to-text/pricing?hl=en",
        tiers: &[
            RateTier::new(0.0, 0.016),
            RateTier::new(500_000.0, 0.01),
            RateTier::new(1_000_000.0, 0.008),
        ],
    },
    SpeechEntry {
        id: "gcp-logged",
        name: "Google Cloud (Logged)",
        description: "Google Speech-to-Text with Logging",
        group: None,
        pricing_url: "https://cloud.google.com/speech-to-text/pricing?hl=en",
        tiers: &[RateTier::new(0.0, 0.012), RateTier::new(500_000.0, 0.01)],
    },
    SpeechEntry {
        id: "openai",
        name: "OpenAI",
        description: "Whisper API",
        group: None,
        pricing_url: "https://openai.com/api/pricing/",
        tiers: &[RateTier::new(0.0, 0.006)],
    },
    SpeechEntry {
        id: "deepgram-nova",
        name: "Deepgram Nova",
        description: "Nova-20/Nova-10 (Growth)",
        group: Some("Deepgram"),
        pricing_url: DEEPGRAM_URL,
        tiers: &[RateTier::new(0.0, 0.0036)],
    },
    SpeechEntry {
        id: "deepgram-whisper",
        name: "Deepgram Whisper",
        description: "Whisper Large",
        group: Some("Deepgram"),
        pricing_url: DEEPGRAM_URL,
        tiers: &[RateTier::new(0.0, 0.0048)],
    },
    SpeechEntry {
        id: "deepgram-enhanced",
        name: "Deepgram Enhanced",
        description: "Enhanced (Pay as you go)",
        group: Some("Deepgram"),
        pricing_url: DEEPGRAM_URL,
        tiers: &[RateTier::new(0.0, 0.0145)],
    },
    SpeechEntry {
        id: "deepgram-base",
        name: "Deepgram Base",
        description: "Base (Pay as you go)",
        group: Some("Deepgram"),
        pricing_url: DEEPGRAM_URL,
        tiers: &[RateTier::new(0.0, 0.0125)],
    },
    SpeechEntry {
        id: "deepgram-redaction",
        name: "Deepgram Redaction",
        description: "Custom Redaction (Growth)",
        group: Some("Deepgram"),
        pricing_url: DEEPGRAM_URL,
        tiers: &[RateTier::new(0.0, 0.0017)],
    },
    SpeechEntry {
        id: "deepgram-entity",
        name: "Deepgram Entity Detection",
        description: "Custom Entity Detection",
        group: Some("Deepgram"),
        pricing_url: DEEPGRAM_URL,
        tiers: &[RateTier::new(0.0, 0.0011)],
    },
    SpeechEntry {
        id: "groq-189x",
        name: "Groq 189x",
        description: "189x Speed Factor",
        group: Some("Groq"),
        pricing_url: GROQ_URL,
        tiers: &[RateTier::new(0.0, 0.001850)],
    },
    SpeechEntry {
        id: "groq-216x",
        name: "Groq 216x",
        description: "216x Speed Factor",
        group: Some("Groq"),
        pricing_url: GROQ_URL,
        tiers: &[RateTier::new(0.0, 0.000667)],
    },
    SpeechEntry {
        id: "groq-250x",
        name: "Groq 250x",
        description: "250x Speed Factor",
        group: Some("Groq"),
        pricing_url: GROQ_URL,
        tiers: &[RateTier::new(0.0, 0.000333)],
    },
];
