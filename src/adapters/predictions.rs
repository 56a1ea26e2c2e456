use std::collections::HashMap;

use crate::domain::model::{Category, ZodiacSign};
use crate::domain::ports::PredictionStore;
use crate::utils::error::Result;

/// Stock predictions covering every (sign, category) pair once. The real
/// store is seeded out of band; this set keeps the CLI and tests useful
/// without one.
const SAMPLE_PREDICTIONS: &[(ZodiacSign, Category, &str)] = &[
    (ZodiacSign::Aries, Category::Love, "A romantic encounter could brighten your day."),
    (ZodiacSign::Aries, Category::Career, "New challenges bring great rewards at work. Embrace them!"),
    (ZodiacSign::Aries, Category::Health, "Pay attention to your energy levels; a short break could be beneficial."),
    (ZodiacSign::Aries, Category::Finance, "Unexpected expenses may arise, but you will manage them effectively."),
    (ZodiacSign::Aries, Category::General, "A day of new beginnings and exciting opportunities."),
    (ZodiacSign::Taurus, Category::Love, "Stability and comfort define your romantic outlook today."),
    (ZodiacSign::Taurus, Category::Career, "Hard work will be recognized. Keep pushing towards your goals."),
    (ZodiacSign::Taurus, Category::Health, "Focus on nourishing foods and gentle exercise for well-being."),
    (ZodiacSign::Taurus, Category::Finance, "A good day for reviewing your budget and making sound financial plans."),
    (ZodiacSign::Taurus, Category::General, "Patience is your virtue today, leading to positive outcomes."),
    (ZodiacSign::Gemini, Category::Love, "Communication is key in your relationships today, Gemini."),
    (ZodiacSign::Gemini, Category::Career, "Networking can open doors to exciting new projects."),
    (ZodiacSign::Gemini, Category::Health, "Mental clarity is high; use it to plan healthy routines."),
    (ZodiacSign::Gemini, Category::Finance, "Look for innovative ways to increase your income."),
    (ZodiacSign::Gemini, Category::General, "A busy but fulfilling day, full of interesting conversations."),
    (ZodiacSign::Cancer, Category::Love, "Emotional connections deepen. Cherish moments with loved ones."),
    (ZodiacSign::Cancer, Category::Career, "Your intuition guides you well in professional decisions."),
    (ZodiacSign::Cancer, Category::Health, "Listen to your body; rest when needed."),
    (ZodiacSign::Cancer, Category::Finance, "A good day for home-related financial matters."),
    (ZodiacSign::Cancer, Category::General, "A comforting day spent nurturing yourself and others."),
    (ZodiacSign::Leo, Category::Love, "Your charisma shines, attracting positive romantic attention."),
    (ZodiacSign::Leo, Category::Career, "Take the lead on a project; your ideas are well-received."),
    (ZodiacSign::Leo, Category::Health, "Channel your vibrant energy into a new fitness routine."),
    (ZodiacSign::Leo, Category::Finance, "Opportunities for financial gain may appear; be bold."),
    (ZodiacSign::Leo, Category::General, "A day to express yourself creatively and confidently."),
    (ZodiacSign::Virgo, Category::Love, "Small gestures of affection mean a lot today."),
    (ZodiacSign::Virgo, Category::Career, "Detail-oriented tasks go smoothly, bringing a sense of accomplishment."),
    (ZodiacSign::Virgo, Category::Health, "Maintain your routine; consistency brings good results."),
    (ZodiacSign::Virgo, Category::Finance, "Review your spending habits for greater efficiency."),
    (ZodiacSign::Virgo, Category::General, "A productive day, focusing on practical matters and organization."),
    (ZodiacSign::Libra, Category::Love, "Harmony and balance are key in your relationships."),
    (ZodiacSign::Libra, Category::Career, "Collaborate with colleagues for mutually beneficial outcomes."),
    (ZodiacSign::Libra, Category::Health, "Seek balance in your diet and lifestyle."),
    (ZodiacSign::Libra, Category::Finance, "Negotiations might favor you today."),
    (ZodiacSign::Libra, Category::General, "A day for making fair decisions and seeking beauty."),
    (ZodiacSign::Scorpio, Category::Love, "Deep emotional insights strengthen your bonds."),
    (ZodiacSign::Scorpio, Category::Career, "Your intense focus helps you achieve significant breakthroughs."),
    (ZodiacSign::Scorpio, Category::Health, "Address any lingering stress with calming activities."),
    (ZodiacSign::Scorpio, Category::Finance, "Investigate new avenues for financial growth."),
    (ZodiacSign::Scorpio, Category::General, "A day of profound transformations and uncovering truths."),
    (ZodiacSign::Sagittarius, Category::Love, "Adventure calls in your romantic life; explore new horizons."),
    (ZodiacSign::Sagittarius, Category::Career, "Learning new skills can significantly boost your career."),
    (ZodiacSign::Sagittarius, Category::Health, "Embrace outdoor activities to uplift your spirits."),
    (ZodiacSign::Sagittarius, Category::Finance, "Long-term financial goals look promising."),
    (ZodiacSign::Sagittarius, Category::General, "A day filled with optimism, exploration, and new ideas."),
    (ZodiacSign::Capricorn, Category::Love, "Solidify existing relationships with clear communication."),
    (ZodiacSign::Capricorn, Category::Career, "Your diligent efforts are paving the way for long-term success."),
    (ZodiacSign::Capricorn, Category::Health, "Stick to a disciplined routine for optimal well-being."),
    (ZodiacSign::Capricorn, Category::Finance, "Prudent financial planning will yield positive results."),
    (ZodiacSign::Capricorn, Category::General, "A productive day for setting and achieving practical goals."),
    (ZodiacSign::Aquarius, Category::Love, "Unique connections bring joy to your relationships."),
    (ZodiacSign::Aquarius, Category::Career, "Innovative ideas are your strength; share them boldly."),
    (ZodiacSign::Aquarius, Category::Health, "Try unconventional approaches to boost your energy."),
    (ZodiacSign::Aquarius, Category::Finance, "Look for new technological investments or solutions."),
    (ZodiacSign::Aquarius, Category::General, "A day of inspiration, social connections, and fresh perspectives."),
    (ZodiacSign::Pisces, Category::Love, "Empathy deepens your romantic understanding."),
    (ZodiacSign::Pisces, Category::Career, "Your creativity is a valuable asset in professional settings."),
    (ZodiacSign::Pisces, Category::Health, "Tune into your emotional needs for overall balance."),
    (ZodiacSign::Pisces, Category::Finance, "Trust your intuition regarding financial opportunities."),
    (ZodiacSign::Pisces, Category::General, "A dreamy day where imagination leads to unexpected beauty."),
];

/// Map-backed prediction store. Read-only once built, so lookups need no
/// locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPredictionStore {
    entries: HashMap<(ZodiacSign, Category), Vec<String>>,
}

impl InMemoryPredictionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the stock sample set.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        for (sign, category, text) in SAMPLE_PREDICTIONS {
            store.insert(*sign, *category, text);
        }
        store
    }

    pub fn insert(&mut self, sign: ZodiacSign, category: Category, text: &str) {
        self.entries
            .entry((sign, category))
            .or_default()
            .push(text.to_string());
    }
}

impl PredictionStore for InMemoryPredictionStore {
    fn candidates(&self, sign: ZodiacSign, category: Category) -> Result<Vec<String>> {
        Ok(self
            .entries
            .get(&(sign, category))
            .cloned()
            .unwrap_or_default())
    }
}
