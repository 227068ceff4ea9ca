//! Standard lexicon table.

use crate::mood::Mood;

/// One row of the built-in table: mood, weight, evidence terms, exclude terms.
pub(crate) type ProfileRow = (Mood, f64, &'static [&'static str], &'static [&'static str]);

pub(crate) const STANDARD_PROFILES: [ProfileRow; 8] = [
    (
        Mood::Happy,
        1.2,
        &[
            "amazing", "wonderful", "thrilled", "fantastic", "overjoyed", "happy", "joy",
            "delight", "great", "awesome", "smiling", "laughing", "cheerful",
        ],
        &[
            "worried", "nervous", "anxious", "sad", "depressed", "miserable", "excited",
            "content", "good", "pleasant",
        ],
    ),
    (
        Mood::Sad,
        1.4,
        &[
            "crying", "down", "disappointing", "upset", "blue", "sad", "unhappy", "grieving",
            "depressed", "miserable", "heartbroken", "tears", "lonely", "hurt", "pain",
        ],
        &["happy", "excited", "joyful", "cheerful", "anxious"],
    ),
    (
        Mood::Anxious,
        1.6,
        &[
            "anxious", "nervous", "worried", "terrified", "afraid", "scared", "fear",
            "stressed", "tense", "panicked", "overwhelmed", "uneasy", "apprehensive",
            "frightened", "distressed", "terrible",
        ],
        &["happy", "excited", "relaxed", "calm", "peaceful"],
    ),
    (
        Mood::Excited,
        1.5,
        &[
            "excited", "pumped", "eager", "enthusiastic", "can't wait", "looking forward",
            "thrilled", "anticipating", "waiting for", "energetic", "pumped up", "hyped",
            "stoked", "psyched",
        ],
        &[
            "worried", "nervous", "anxious", "sad", "depressed", "happy", "content", "calm",
        ],
    ),
    (
        Mood::Relaxed,
        1.5,
        &[
            "relaxed", "calm", "peaceful", "content", "at ease", "chill", "laid back",
            "serene", "tranquil", "unwind", "mellow", "easygoing", "composed", "collected",
            "restful", "pleasant", "smoothly", "good",
        ],
        &[
            "excited", "worried", "nervous", "anxious", "stressed", "happy", "thrilled",
        ],
    ),
    (
        Mood::Nostalgic,
        1.4,
        &[
            "nostalgic", "memories", "remember", "miss", "good old days", "back then",
            "childhood", "past", "reminiscing", "throwback", "reminiscent", "reminiscence",
            "recollection", "memory", "fondly",
        ],
        &["present", "future", "now", "current", "happy", "excited"],
    ),
    (
        Mood::Romantic,
        1.4,
        &[
            "romantic", "love", "loving", "affectionate", "passionate", "smitten",
            "enchanted", "heart", "sweet", "dear", "adore", "cherish", "devoted", "fond",
            "infatuated",
        ],
        &["hate", "dislike", "angry", "upset", "happy"],
    ),
    (
        Mood::Neutral,
        1.0,
        &[
            "neutral", "average", "typical", "usual", "neither", "normal", "regular",
            "ordinary", "standard", "moderate", "balanced", "even", "steady", "stable",
            "nothing special", "business as usual",
        ],
        &["happy", "sad", "excited", "anxious", "relaxed"],
    ),
];
