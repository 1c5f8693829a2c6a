//! Literal seed catalogs.
//!
//! # Responsibility
//! - Hold the fixed example quotes used by baseline and bulk seeding.
//! - Build bulk candidates, appending variant markers past the first cycle.
//!
//! # Invariants
//! - Catalog order is stable; seeding preserves it.
//! - Within one catalog every `content` value is distinct.

use crate::model::quote::NewQuote;

/// One literal catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub content: &'static str,
    pub pinyin: &'static str,
    pub author: &'static str,
    pub era: &'static str,
    pub sentiment: &'static str,
    pub meaning: &'static str,
    pub usage_scene: &'static str,
    pub category: &'static str,
    pub allusion: &'static str,
    pub translation: &'static str,
    pub usage_notes: &'static str,
}

impl CatalogEntry {
    pub fn to_new_quote(&self) -> NewQuote {
        NewQuote {
            content: self.content.to_string(),
            pinyin: Some(self.pinyin.to_string()),
            author: Some(self.author.to_string()),
            era: Some(self.era.to_string()),
            sentiment: Some(self.sentiment.to_string()),
            meaning: Some(self.meaning.to_string()),
            usage_scene: Some(self.usage_scene.to_string()),
            category: Some(self.category.to_string()),
            allusion: Some(self.allusion.to_string()),
            translation: Some(self.translation.to_string()),
            usage_notes: Some(self.usage_notes.to_string()),
        }
    }
}

/// Builds the bulk candidate for 1-based position `index`.
///
/// Cycles `catalog` by `(index - 1) % len`. Positions past the first cycle get
/// variant markers on `content`, `pinyin` and `translation`. Returns `None`
/// for an empty catalog or `index == 0`.
pub fn bulk_candidate(catalog: &[CatalogEntry], index: usize) -> Option<NewQuote> {
    if catalog.is_empty() || index == 0 {
        return None;
    }

    let entry = &catalog[(index - 1) % catalog.len()];
    let mut quote = entry.to_new_quote();
    if index > catalog.len() {
        quote.content = format!("{}（变体{index}）", entry.content);
        quote.pinyin = Some(format!("{}（biàn tǐ {index}）", entry.pinyin));
        quote.translation = Some(format!("{} (variant {index})", entry.translation));
    }
    Some(quote)
}

/// Catalog for the baseline seed run.
pub const BASELINE_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        content: "朽木不可雕也",
        pinyin: "xiǔ mù bù kě diāo yě",
        author: "孔子",
        era: "春秋时期",
        sentiment: "贬义",
        meaning: "比喻人或事物败坏到不可救药的地步",
        usage_scene: "批评人不思进取",
        category: "教育",
        allusion: "出自《论语·公冶长》，孔子看到弟子宰予白天睡觉，感慨地说：'朽木不可雕也，粪土之墙不可圬也'",
        translation: "Rotten wood cannot be carved.",
        usage_notes: "用于批评人缺乏上进心或品质恶劣，无法培养",
    },
    CatalogEntry {
        content: "学而时习之，不亦说乎",
        pinyin: "xué ér shí xí zhī，bù yì yuè hū",
        author: "孔子",
        era: "春秋时期",
        sentiment: "褒义",
        meaning: "学习并且按时温习，不是很愉快吗",
        usage_scene: "鼓励学习",
        category: "教育",
        allusion: "出自《论语·学而》，孔子关于学习方法的论述",
        translation: "Is it not pleasant to learn with a constant perseverance and application?",
        usage_notes: "用于鼓励人们坚持学习，不断温习",
    },
    CatalogEntry {
        content: "三人行，必有我师焉",
        pinyin: "sān rén xíng，bì yǒu wǒ shī yān",
        author: "孔子",
        era: "春秋时期",
        sentiment: "褒义",
        meaning: "三个人一起走路，其中必定有人可以做我的老师",
        usage_scene: "谦虚学习",
        category: "教育",
        allusion: "出自《论语·述而》，孔子关于学习态度的论述",
        translation: "When I walk along with two others, they may serve me as my teachers.",
        usage_notes: "用于表达谦虚的学习态度，善于向他人学习",
    },
    CatalogEntry {
        content: "己所不欲，勿施于人",
        pinyin: "jǐ suǒ bù yù，wù shī yú rén",
        author: "孔子",
        era: "春秋时期",
        sentiment: "褒义",
        meaning: "自己不愿意的，不要强加给别人",
        usage_scene: "人际交往",
        category: "道德",
        allusion: "出自《论语·颜渊》，孔子关于仁的论述",
        translation: "Do not do to others what you do not want done to yourself.",
        usage_notes: "用于指导人际交往，强调换位思考",
    },
    CatalogEntry {
        content: "天时不如地利，地利不如人和",
        pinyin: "tiān shí bù rú dì lì，dì lì bù rú rén hé",
        author: "孟子",
        era: "战国时期",
        sentiment: "褒义",
        meaning: "有利的时机和气候不如有利的地势，有利的地势不如人的齐心协力",
        usage_scene: "团队合作",
        category: "治国",
        allusion: "出自《孟子·公孙丑下》，孟子关于战争胜负因素的论述",
        translation: "Opportunities vouchsafed by Heaven are less important than terrestrial advantages, which in turn are less important than the unity among people.",
        usage_notes: "用于强调团队合作和人心团结的重要性",
    },
];

/// Catalog cycled by bulk seeding.
pub const BULK_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        content: "学而时习之，不亦说乎",
        pinyin: "xué ér shí xí zhī，bù yì yuè hū",
        author: "孔子",
        era: "春秋时期",
        sentiment: "褒义",
        meaning: "学习并且按时温习，不是很愉快吗",
        usage_scene: "鼓励学习",
        category: "教育",
        allusion: "出自《论语·学而》，孔子关于学习方法的论述",
        translation: "Is it not pleasant to learn with a constant perseverance and application?",
        usage_notes: "用于鼓励人们坚持学习，不断温习",
    },
    CatalogEntry {
        content: "三人行，必有我师焉",
        pinyin: "sān rén xíng，bì yǒu wǒ shī yān",
        author: "孔子",
        era: "春秋时期",
        sentiment: "褒义",
        meaning: "三个人一起走路，其中必定有人可以做我的老师",
        usage_scene: "谦虚学习",
        category: "教育",
        allusion: "出自《论语·述而》，孔子关于学习态度的论述",
        translation: "When I walk along with two others, they may serve me as my teachers.",
        usage_notes: "用于表达谦虚的学习态度，善于向他人学习",
    },
    CatalogEntry {
        content: "己所不欲，勿施于人",
        pinyin: "jǐ suǒ bù yù，wù shī yú rén",
        author: "孔子",
        era: "春秋时期",
        sentiment: "褒义",
        meaning: "自己不愿意的，不要强加给别人",
        usage_scene: "人际交往",
        category: "道德",
        allusion: "出自《论语·颜渊》，孔子关于仁的论述",
        translation: "Do not do to others what you do not want done to yourself.",
        usage_notes: "用于指导人际交往，强调换位思考",
    },
    CatalogEntry {
        content: "天时不如地利，地利不如人和",
        pinyin: "tiān shí bù rú dì lì，dì lì bù rú rén hé",
        author: "孟子",
        era: "战国时期",
        sentiment: "褒义",
        meaning: "有利的时机和气候不如有利的地势，有利的地势不如人的齐心协力",
        usage_scene: "团队合作",
        category: "治国",
        allusion: "出自《孟子·公孙丑下》，孟子关于战争胜负因素的论述",
        translation: "Opportunities vouchsafed by Heaven are less important than terrestrial advantages, which in turn are less important than the unity among people.",
        usage_notes: "用于强调团队合作和人心团结的重要性",
    },
    CatalogEntry {
        content: "塞翁失马，焉知非福",
        pinyin: "sài wēng shī mǎ，yān zhī fēi fú",
        author: "刘安",
        era: "西汉",
        sentiment: "中性",
        meaning: "比喻一时虽然受到损失，也许反而因此能得到好处",
        usage_scene: "安慰他人",
        category: "哲理",
        allusion: "出自《淮南子·人间训》，讲述边塞老人丢失马匹后发生的一系列故事",
        translation: "A loss may turn out to be a gain.",
        usage_notes: "用于安慰遇到挫折的人，提醒事物的两面性",
    },
    CatalogEntry {
        content: "水滴石穿，非一日之功",
        pinyin: "shuǐ dī shí chuān，fēi yī rì zhī gōng",
        author: "罗大经",
        era: "南宋",
        sentiment: "褒义",
        meaning: "水经常滴在石头上，能使石头穿孔，但这不是一天就能做成的",
        usage_scene: "鼓励坚持",
        category: "哲理",
        allusion: "出自《鹤林玉露》，比喻只要有恒心，不断努力，事情就一定能成功",
        translation: "Constant dripping wears away the stone, and it's not the work of a single day.",
        usage_notes: "用于鼓励人们坚持努力，不要急于求成",
    },
    CatalogEntry {
        content: "纸上得来终觉浅，绝知此事要躬行",
        pinyin: "zhǐ shàng dé lái zhōng jué qiǎn，jué zhī cǐ shì yào gōng xíng",
        author: "陆游",
        era: "南宋",
        sentiment: "褒义",
        meaning: "从书本上得到的知识终归是浅薄的，未能理解知识的真谛，要真正理解书中的深刻道理，必须亲身去实践",
        usage_scene: "强调实践",
        category: "教育",
        allusion: "出自《冬夜读书示子聿》，陆游教育儿子的诗句",
        translation: "What you learn from books is superficial after all. To truly understand something, you must practice it yourself.",
        usage_notes: "用于强调实践的重要性，理论与实践相结合",
    },
    CatalogEntry {
        content: "路漫漫其修远兮，吾将上下而求索",
        pinyin: "lù màn màn qí xiū yuǎn xī，wú jiāng shàng xià ér qiú suǒ",
        author: "屈原",
        era: "战国时期",
        sentiment: "褒义",
        meaning: "前面的道路啊又远又长，我将上上下下追求理想",
        usage_scene: "鼓励奋斗",
        category: "修身",
        allusion: "出自《离骚》，屈原表达自己追求理想的决心",
        translation: "The road ahead is long and winding, but I will keep searching high and low.",
        usage_notes: "用于表达追求理想的决心和勇气",
    },
    CatalogEntry {
        content: "春蚕到死丝方尽，蜡炬成灰泪始干",
        pinyin: "chūn cán dào sǐ sī fāng jìn，là jù chéng huī lèi shǐ gān",
        author: "李商隐",
        era: "唐代",
        sentiment: "褒义",
        meaning: "春蚕结茧到死时丝才吐完，蜡烛要燃尽成灰时像泪一样的蜡油才能滴干",
        usage_scene: "歌颂奉献",
        category: "情感",
        allusion: "出自《无题》，原本表达爱情的坚贞，后常用来歌颂教师等的奉献精神",
        translation: "The silkworm dies only when it has exhausted its silk; the candle's tears dry only when it turns to ash.",
        usage_notes: "用于歌颂无私奉献的精神",
    },
    CatalogEntry {
        content: "海内存知己，天涯若比邻",
        pinyin: "hǎi nèi cún zhī jǐ，tiān yá ruò bǐ lín",
        author: "王勃",
        era: "唐代",
        sentiment: "褒义",
        meaning: "只要四海之内有知心朋友，即使远在天涯海角，也好像近在身边一样",
        usage_scene: "送别友人",
        category: "情感",
        allusion: "出自《送杜少府之任蜀州》，表达对友人的离别之情",
        translation: "If you have a friend who knows you in this world, distance makes you neighbors.",
        usage_notes: "用于送别友人，表达友谊不受距离影响",
    },
];

#[cfg(test)]
mod tests {
    use super::{bulk_candidate, BASELINE_CATALOG, BULK_CATALOG};
    use std::collections::HashSet;

    #[test]
    fn catalog_contents_are_distinct() {
        for catalog in [BASELINE_CATALOG, BULK_CATALOG] {
            let unique: HashSet<_> = catalog.iter().map(|entry| entry.content).collect();
            assert_eq!(unique.len(), catalog.len());
        }
    }

    #[test]
    fn first_cycle_candidates_are_unmodified() {
        let candidate = bulk_candidate(BULK_CATALOG, 3).unwrap();
        assert_eq!(candidate, BULK_CATALOG[2].to_new_quote());
    }

    #[test]
    fn later_cycles_get_variant_markers() {
        let candidate = bulk_candidate(BULK_CATALOG, 11).unwrap();
        assert_eq!(candidate.content, "学而时习之，不亦说乎（变体11）");
        assert_eq!(
            candidate.pinyin.as_deref(),
            Some("xué ér shí xí zhī，bù yì yuè hū（biàn tǐ 11）")
        );
        assert!(candidate
            .translation
            .as_deref()
            .unwrap()
            .ends_with(" (variant 11)"));
        assert_eq!(candidate.author.as_deref(), Some("孔子"));
    }

    #[test]
    fn zero_index_and_empty_catalog_yield_nothing() {
        assert!(bulk_candidate(BULK_CATALOG, 0).is_none());
        assert!(bulk_candidate(&[], 1).is_none());
    }
}
