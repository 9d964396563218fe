//! Static semantic group table.
//!
//! Ordered list of (canonical name, variants) entries grouped by clinical
//! category. Declaration order is significant: when two groups tie on
//! overlap length during matching, the earlier group wins. Within a
//! family, generic names are declared before specialized ones so that a
//! generic canonical name never resolves into a specialized group.
//!
//! Table invariants, enforced by tests in `canonicalize`:
//! - every canonical name appears in its own variant list;
//! - no canonical name appears in another group's variant list;
//! - no two canonical names hash to the same id.

use triage_model::SymptomCategory;

/// One declared semantic group: a canonical symptom name and its textual
/// variants.
#[derive(Debug, Clone, Copy)]
pub struct SemanticGroup {
    pub canonical: &'static str,
    pub category: SymptomCategory,
    pub variants: &'static [&'static str],
}

macro_rules! group {
    ($canonical:literal, $category:ident, [$($variant:literal),+ $(,)?]) => {
        SemanticGroup {
            canonical: $canonical,
            category: SymptomCategory::$category,
            variants: &[$($variant),+],
        }
    };
}

/// The full semantic group table, in declaration order.
pub static SEMANTIC_GROUPS: &[SemanticGroup] = &[
    // Pain by quality. Declared before the site groups: several site
    // variants embed a quality name (头胀痛, 关节胀痛), and on an overlap
    // tie the earlier group must be the quality one so that quality
    // canonicals keep normalizing to themselves.
    group!("刺痛", PainByQuality, ["刺痛", "针刺样疼痛", "锐痛"]),
    group!("胀痛", PainByQuality, ["胀痛", "胀疼", "胀满痛"]),
    group!("隐痛", PainByQuality, ["隐痛", "隐隐作痛", "钝痛"]),
    group!("绞痛", PainByQuality, ["绞痛", "痉挛性疼痛", "绞扭样疼痛"]),
    group!("烧灼痛", PainByQuality, ["烧灼痛", "灼痛", "烧灼感"]),
    group!("搏动性疼痛", PainByQuality, ["搏动性疼痛", "跳痛", "搏动痛"]),
    group!("剧痛", PainByQuality, ["剧痛", "剧烈疼痛", "剧疼", "严重疼痛"]),
    // Pain by site: head and face
    group!("头痛", PainBySite, ["头痛", "头疼", "头部疼痛", "头胀痛", "头部胀痛"]),
    group!("偏头痛", PainBySite, ["偏头痛", "偏侧头痛", "单侧头痛"]),
    group!("紧张性头痛", PainBySite, ["紧张性头痛", "紧张型头痛", "压迫性头痛"]),
    group!("面部疼痛", PainBySite, ["面部疼痛", "面痛", "脸痛"]),
    group!("牙痛", PainBySite, ["牙痛", "牙疼", "牙齿疼痛", "牙齿痛"]),
    group!("下颌痛", PainBySite, ["下颌痛", "下颌疼痛"]),
    // Pain by site: neck and throat
    group!("颈痛", PainBySite, ["颈痛", "颈部疼痛", "脖子痛", "颈椎痛", "颈肩痛"]),
    group!("咽痛", PainBySite, ["咽痛", "咽喉痛", "喉咙痛", "吞咽疼痛", "咽部疼痛", "喉部疼痛"]),
    // Pain by site: chest and back
    group!("胸痛", PainBySite, ["胸痛", "胸部疼痛", "前胸痛"]),
    group!("心前区疼痛", PainBySite, ["心前区疼痛", "心前区痛", "心脏区疼痛", "心口痛"]),
    group!("肋间神经痛", PainBySite, ["肋间神经痛", "肋间痛", "肋骨痛"]),
    group!("背痛", PainBySite, ["背痛", "背部疼痛", "后背痛", "脊背痛"]),
    // Pain by site: abdomen
    group!("腹痛", PainBySite, ["腹痛", "腹部疼痛", "肚子痛", "肚子疼", "肚痛"]),
    group!("上腹痛", PainBySite, ["上腹痛", "上腹部疼痛", "胃区疼痛", "胃痛", "胃部疼痛"]),
    group!("下腹痛", PainBySite, ["下腹痛", "下腹部疼痛", "小腹痛", "小腹疼痛"]),
    group!("右上腹痛", PainBySite, ["右上腹痛", "肝区疼痛"]),
    group!("左上腹痛", PainBySite, ["左上腹痛", "脾区疼痛"]),
    group!("脐周痛", PainBySite, ["脐周痛", "脐周疼痛", "肚脐周围痛"]),
    // Pain by site: lower back
    group!("腰痛", PainBySite, ["腰痛", "腰部疼痛", "腰酸", "腰酸痛"]),
    group!("腰背痛", PainBySite, ["腰背痛", "腰背部疼痛", "腰脊痛"]),
    group!("肾区疼痛", PainBySite, ["肾区疼痛", "肾区痛"]),
    // Pain by site: limbs
    group!("关节痛", PainBySite, ["关节痛", "关节疼痛", "关节酸痛", "关节胀痛"]),
    group!("肌肉痛", PainBySite, ["肌肉痛", "肌肉疼痛", "肌肉酸痛", "肌痛", "肌肉胀痛"]),
    group!("骨痛", PainBySite, ["骨痛", "骨疼", "骨骼疼痛", "骨头痛"]),
    group!("四肢痛", PainBySite, ["四肢痛", "四肢疼痛"]),
    group!("手痛", PainBySite, ["手痛", "手部疼痛", "手疼"]),
    group!("腕痛", PainBySite, ["腕痛", "手腕痛", "腕关节痛"]),
    group!("腿痛", PainBySite, ["腿痛", "腿部疼痛", "下肢痛"]),
    group!("膝痛", PainBySite, ["膝痛", "膝盖痛", "膝关节痛", "膝部疼痛"]),
    group!("踝痛", PainBySite, ["踝痛", "脚踝痛", "踝关节痛"]),
    group!("足痛", PainBySite, ["足痛", "脚痛", "脚疼", "足部疼痛"]),
    group!("足跟痛", PainBySite, ["足跟痛", "脚后跟疼", "脚后跟痛", "足跟疼痛"]),
    // Pain by site: head and neck organs, urogenital
    group!("耳痛", PainBySite, ["耳痛", "耳部疼痛", "耳朵痛", "耳内疼痛"]),
    group!("眼痛", PainBySite, ["眼痛", "眼部疼痛", "眼睛疼痛", "眼球痛"]),
    group!("尿痛", PainBySite, ["尿痛", "排尿疼痛", "小便疼痛", "尿道灼痛"]),
    group!("睾丸痛", PainBySite, ["睾丸痛", "睾丸疼痛", "阴囊痛"]),
    group!("盆腔痛", PainBySite, ["盆腔痛", "盆腔疼痛"]),
    // Fever
    group!("发热", Fever, ["发热", "发烧", "体温升高"]),
    group!("高热", Fever, ["高热", "高烧", "高度发热"]),
    group!("低热", Fever, ["低热", "低烧", "微热", "轻度发热"]),
    group!("持续发热", Fever, ["持续发热", "持续发烧", "连续发热"]),
    group!("间歇性发热", Fever, ["间歇性发热", "间歇发热", "阵发性发热"]),
    group!("寒战", Fever, ["寒战", "畏寒", "怕冷", "恶寒", "打寒战"]),
    // Respiratory
    group!("咳嗽", Respiratory, ["咳嗽", "咳"]),
    group!("干咳", Respiratory, ["干咳", "无痰咳嗽", "刺激性咳嗽"]),
    group!("咳痰", Respiratory, ["咳痰", "咯痰", "痰多", "有痰", "痰液增多"]),
    group!("血痰", Respiratory, ["血痰", "痰中带血"]),
    group!("咯血", Respiratory, ["咯血", "咳血", "吐血"]),
    group!("呼吸困难", Respiratory, ["呼吸困难", "气短", "气促", "呼吸急促"]),
    group!("喘息", Respiratory, ["喘息", "喘", "气喘", "哮喘"]),
    group!("胸闷", Respiratory, ["胸闷", "胸部闷胀", "胸部压迫感", "憋气"]),
    // Digestive
    group!("恶心", Digestive, ["恶心", "想吐", "恶心感", "反胃"]),
    group!("呕吐", Digestive, ["呕吐", "吐", "呕"]),
    group!("干呕", Digestive, ["干呕", "干吐", "空呕"]),
    group!("腹泻", Digestive, ["腹泻", "拉肚子", "大便次数增多", "稀便"]),
    group!("水样便", Digestive, ["水样便", "水泻", "水样腹泻"]),
    group!("便秘", Digestive, ["便秘", "大便干燥", "排便困难", "大便秘结"]),
    group!("腹胀", Digestive, ["腹胀", "腹部胀满", "肚子胀", "胃胀", "腹部胀气"]),
    group!("食欲不振", Digestive, ["食欲不振", "食欲减退", "不想吃饭", "厌食", "食欲差"]),
    group!("便血", Digestive, ["便血", "大便带血", "血便"]),
    group!("黑便", Digestive, ["黑便", "柏油样便", "黑色大便"]),
    // Neurological
    group!("头晕", Neurological, ["头晕", "头昏", "晕"]),
    group!("眩晕", Neurological, ["眩晕", "晕眩", "眩晕感", "旋转感"]),
    group!("失眠", Neurological, ["失眠", "睡眠障碍", "入睡困难", "睡眠不好", "不能入睡"]),
    group!("嗜睡", Neurological, ["嗜睡", "过度睡眠", "睡意浓"]),
    group!("疲劳", Neurological, ["疲劳", "乏力", "无力", "疲倦", "精神不振", "疲乏"]),
    group!("意识障碍", Neurological, ["意识障碍", "意识模糊", "神志不清"]),
    group!("抽搐", Neurological, ["抽搐", "痉挛", "抽筋"]),
    // Dermatological
    group!("皮疹", Dermatological, ["皮疹", "皮肤红疹", "红疹", "疹子", "出疹"]),
    group!("瘙痒", Dermatological, ["瘙痒", "痒", "皮肤瘙痒", "皮痒", "发痒"]),
    group!("红肿", Dermatological, ["红肿", "红胀"]),
    group!("水肿", Dermatological, ["水肿", "浮肿", "肿胀"]),
    group!("皮肤干燥", Dermatological, ["皮肤干燥", "皮肤粗糙", "皮肤脱屑", "脱皮"]),
    group!("皮肤苍白", Dermatological, ["皮肤苍白", "面色苍白", "苍白"]),
    group!("黄疸", Dermatological, ["黄疸", "皮肤发黄", "巩膜黄染"]),
    // Urinary
    group!("尿频", Urinary, ["尿频", "小便频繁", "排尿次数增多"]),
    group!("尿急", Urinary, ["尿急", "尿意急迫", "憋不住尿"]),
    group!("血尿", Urinary, ["血尿", "尿血", "小便带血", "尿液发红"]),
    group!("蛋白尿", Urinary, ["蛋白尿", "尿蛋白", "尿液泡沫"]),
    group!("夜尿增多", Urinary, ["夜尿增多", "夜尿频繁"]),
    // Cardiovascular
    group!("心悸", Cardiovascular, ["心悸", "心慌", "心跳加快", "心跳快"]),
    group!("心律不齐", Cardiovascular, ["心律不齐", "心跳不规律", "心律失常"]),
    group!("心动过速", Cardiovascular, ["心动过速", "心跳过快", "心率快"]),
    group!("心动过缓", Cardiovascular, ["心动过缓", "心跳过慢", "心率慢"]),
    // Ocular
    group!("视力模糊", Ocular, ["视力模糊", "视物模糊", "看东西模糊", "视力下降", "视物不清"]),
    group!("复视", Ocular, ["复视", "看东西重影", "双影"]),
    group!("畏光", Ocular, ["畏光", "怕光", "光敏感"]),
    group!("眼干", Ocular, ["眼干", "眼睛干涩", "干眼"]),
    group!("流泪", Ocular, ["流泪", "泪水增多", "溢泪"]),
    group!("眼红", Ocular, ["眼红", "眼睛发红", "结膜充血"]),
    // ENT
    group!("听力下降", Ent, ["听力下降", "听力减退", "耳聋"]),
    group!("耳鸣", Ent, ["耳鸣", "耳内响声"]),
    group!("鼻塞", Ent, ["鼻塞", "鼻堵", "鼻子不通气"]),
    group!("流鼻涕", Ent, ["流鼻涕", "鼻涕", "流涕"]),
    group!("打喷嚏", Ent, ["打喷嚏", "喷嚏", "连续打喷嚏"]),
    group!("嗅觉减退", Ent, ["嗅觉减退", "嗅觉丧失", "闻不到味道"]),
    group!("声音嘶哑", Ent, ["声音嘶哑", "嗓子哑", "声嘶"]),
    // Constitutional
    group!("体重下降", Constitutional, ["体重下降", "体重减轻", "消瘦", "瘦了"]),
    group!("体重增加", Constitutional, ["体重增加", "体重增长", "发胖", "长胖"]),
    group!("出汗", Constitutional, ["出汗", "多汗", "汗多"]),
    group!("盗汗", Constitutional, ["盗汗", "夜间出汗", "睡觉出汗"]),
    group!("口渴", Constitutional, ["口渴", "渴", "想喝水"]),
    group!("口干", Constitutional, ["口干", "嘴干", "口腔干燥"]),
    group!("多尿", Constitutional, ["多尿", "尿量增多", "小便多"]),
    group!("少尿", Constitutional, ["少尿", "尿量减少", "小便少"]),
];
