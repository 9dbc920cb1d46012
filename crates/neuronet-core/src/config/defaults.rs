// Single source of truth for all default values.

// --- Metric weights ---
pub const DEFAULT_JACCARD_WEIGHT: f64 = 0.25;
pub const DEFAULT_COSINE_WEIGHT: f64 = 0.25;
pub const DEFAULT_LEVENSHTEIN_WEIGHT: f64 = 0.15;
pub const DEFAULT_NGRAM_WEIGHT: f64 = 0.15;
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.15;
pub const DEFAULT_LENGTH_WEIGHT: f64 = 0.05;

// --- Tokenization ---
pub const DEFAULT_NGRAM_SIZE: usize = 3;
pub const DEFAULT_SCORING_MIN_TOKEN_CHARS: usize = 3; // keep tokens longer than 2
pub const DEFAULT_ANALYSIS_MIN_TOKEN_CHARS: usize = 4; // keep tokens longer than 3

// --- Analysis report ---
pub const DEFAULT_MAX_SHARED_TERMS: usize = 10;
pub const DEFAULT_MAX_UNIQUE_TERMS: usize = 5;
pub const DEFAULT_MAX_KEY_CONCEPTS: usize = 10;
pub const DEFAULT_SIMILAR_LENGTH_RATIO: f64 = 0.8;

// --- Engine ---
pub const DEFAULT_FILTER_BY_ITEM_TYPE: bool = true;
pub const DEFAULT_PARALLEL_MIN_RECORDS: usize = 32;
pub const DEFAULT_MAX_CONTENT_CHARS: Option<usize> = None;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = false;

// --- Semantic keyword groups ---
pub const DEFAULT_KEYWORD_GROUPS: &[(&str, &[&str])] = &[
    (
        "architecture",
        &[
            "building",
            "structure",
            "design",
            "architectural",
            "construction",
            "skyscraper",
            "tower",
            "facade",
        ],
    ),
    (
        "technology",
        &[
            "tech",
            "digital",
            "electronic",
            "computer",
            "software",
            "hardware",
            "ai",
            "artificial",
            "intelligence",
        ],
    ),
    (
        "nature",
        &[
            "natural",
            "organic",
            "green",
            "environmental",
            "sustainable",
            "eco",
            "garden",
            "forest",
            "tree",
        ],
    ),
    (
        "urban",
        &[
            "city",
            "urban",
            "metropolitan",
            "downtown",
            "street",
            "avenue",
            "plaza",
            "district",
        ],
    ),
    (
        "futuristic",
        &[
            "futuristic",
            "modern",
            "contemporary",
            "advanced",
            "innovative",
            "cutting-edge",
            "state-of-the-art",
        ],
    ),
    (
        "lighting",
        &[
            "light",
            "illumination",
            "bright",
            "glow",
            "shine",
            "luminous",
            "radiant",
            "brilliant",
        ],
    ),
    (
        "color",
        &[
            "colorful",
            "vibrant",
            "bright",
            "vivid",
            "saturated",
            "hue",
            "tone",
            "shade",
        ],
    ),
];
