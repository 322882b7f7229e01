use crate::core::{
    TangoError,
    VocabularyItem,
};

/// Supplies the initial vocabulary list when no catalog store exists yet.
pub trait SeedCatalog {
    fn seed(&self) -> Result<Vec<VocabularyItem>, TangoError>;
}

/// Small demo list of easily-confused words.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSeed;

const BUILTIN_WORDS: &[(u32, &str, &str, &str, &str, i64)] = &[
    (1, "機会", "きかい", "opportunity", "N3", 500),
    (2, "機械", "きかい", "machine", "N4", 600),
    (3, "議会", "ぎかい", "diet/congress", "N3", 700),
    (4, "理解", "りかい", "understanding", "N3", 200),
    (5, "世界", "せかい", "world", "N5", 100),
    (6, "正解", "せいかい", "correct answer", "N3", 800),
    (7, "会社", "かいしゃ", "company", "N5", 150),
    (8, "社会", "しゃかい", "society", "N4", 160),
    (9, "社員", "しゃいん", "company employee", "N4", 300),
    (10, "全員", "ぜんいん", "all members", "N4", 400),
    (11, "安全", "あんぜん", "safety", "N4", 450),
    (12, "完全", "かんぜん", "perfect/complete", "N3", 550),
    (13, "学校", "がっこう", "school", "N5", 50),
    (14, "格好", "かっこう", "appearance/shape", "N3", 900),
    (15, "銀行", "ぎんこう", "bank", "N5", 250),
    (16, "健康", "けんこう", "health", "N4", 350),
    (17, "空港", "くうこう", "airport", "N4", 650),
    (18, "高校", "こうこう", "high school", "N4", 220),
    (19, "成功", "せいこう", "success", "N3", 750),
    (20, "性格", "せいかく", "personality", "N3", 850),
    (21, "生活", "せいかつ", "daily life", "N4", 180),
    (22, "活動", "かつどう", "activity", "N3", 420),
    (23, "動物", "どうぶつ", "animal", "N5", 320),
    (24, "植物", "しょくぶつ", "plant", "N4", 950),
    (25, "食事", "しょくじ", "meal", "N4", 280),
    (26, "仕事", "しごと", "work", "N5", 120),
    (27, "仕方", "しかた", "method/way", "N4", 520),
    (28, "味方", "みかた", "ally/supporter", "N3", 920),
    (29, "見方", "みかた", "viewpoint", "N3", 930),
    (30, "先生", "せんせい", "teacher", "N5", 60),
];

impl SeedCatalog for BuiltinSeed {
    fn seed(&self) -> Result<Vec<VocabularyItem>, TangoError> {
        Ok(BUILTIN_WORDS
            .iter()
            .map(|&(id, word, kana, meaning, level, rank)| {
                VocabularyItem::new(id, word, kana, meaning, level, rank)
            })
            .collect())
    }
}
