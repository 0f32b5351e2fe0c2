use content_intel::engine::assess_content_quality;
use content_intel::{QualityAssessor, QualityConfig, Suggestion};

// * Test Suite for Content Quality Assessment

const ARTICLE: &str = "Karasu, Sakarya'nın en sevilen sahil ilçelerinden biridir. \
    Yaz aylarında nüfusu birkaç katına çıkar. \
    Denize yakın konutlar bu yüzden hızla değer kazanır.\n\n\
    Bölgede ev almak isteyenler önce mahalleleri gezmeli. \
    Merkez, Yalı ve Kurudere farklı bütçelere hitap eder. \
    Tapu ve kredi işlemleri için yerel bir danışmanla çalışmak süreci hızlandırır.\n\n\
    Yatırım amaçlı alımlarda kira getirisi önemlidir. \
    Yazlık daireler sezon boyunca günlük kiralanabilir.";

#[test]
fn test_blank_content_returns_none() {
    assert!(assess_content_quality("", "title", &[]).is_none());
    assert!(assess_content_quality("   ", "title", &[]).is_none());
    assert!(assess_content_quality("\n\t \r\n", "", &["karasu"]).is_none());
}

#[test]
fn test_scores_are_bounded() {
    let title = "Karasu'da Ev Almak: Mahalleler ve Fiyatlar";
    let report = assess_content_quality(ARTICLE, title, &["karasu"]).unwrap();
    for score in [report.overall(), report.readability(), report.seo(), report.engagement()] {
        assert!(score <= 100, "Score out of range: {}", score);
    }
}

#[test]
fn test_overall_lies_between_sub_scores() {
    let report = assess_content_quality(ARTICLE, "Karasu rehberi", &["karasu", "yazlık"]).unwrap();
    let subs = [report.readability(), report.seo(), report.engagement()];
    let min = *subs.iter().min().unwrap();
    let max = *subs.iter().max().unwrap();
    assert!(report.overall() >= min && report.overall() <= max);
}

#[test]
fn test_lists_and_subheadings_raise_engagement() {
    let base = assess_content_quality(ARTICLE, "Karasu rehberi", &[]).unwrap();
    let enriched_content = format!(
        "{}\n\n## Öne Çıkan Özellikler\n\n\
         - Denize yürüme mesafesi\n- Site içinde havuz\n- Kapalı otopark",
        ARTICLE
    );
    let enriched = assess_content_quality(&enriched_content, "Karasu rehberi", &[]).unwrap();
    assert!(
        enriched.engagement() > base.engagement(),
        "Engagement should rise: {} -> {}",
        base.engagement(),
        enriched.engagement()
    );
    assert!(enriched.seo() >= base.seo());
}

#[test]
fn test_run_on_sentences_lower_readability() {
    let short = "Ev satıldı. Fiyat uygundu. Alıcı memnun. \
                 Tapu devri yapıldı. Anahtar teslim edildi.";
    let run_on = "Ev geçen hafta içinde uzun süredir bölgede arama yapan ve daha önce \
                  birkaç farklı ilana teklif vermiş olan emekli bir öğretmen çift tarafından \
                  piyasa ortalamasının biraz altında kalan ama yine de satıcıyı memnun eden \
                  bir fiyata ve hızlı bir tapu devriyle birlikte satıldı";
    let short_report = assess_content_quality(short, "", &[]).unwrap();
    let run_on_report = assess_content_quality(run_on, "", &[]).unwrap();
    assert!(short_report.readability() > run_on_report.readability());
}

#[test]
fn test_thin_content_caps_seo() {
    let config = QualityConfig::default();
    let report = assess_content_quality(
        "## Karasu\n\n## Sahil\n\nKarasu sahilinde satılık daire.",
        "Karasu'da denize sıfır satılık daire ilanları",
        &["karasu"],
    )
    .unwrap();
    assert!(report.seo() as f64 <= config.thin_content_seo_cap);
}

#[test]
fn test_keyword_stuffing_scores_lower_than_natural_use() {
    let natural = format!("{} Karasu.", ARTICLE);
    let stuffed = format!("{} {}", ARTICLE, "karasu ".repeat(30));
    let title = "Karasu'da ev almadan önce bilmeniz gerekenler";
    let assessor = QualityAssessor::new();
    let natural = assessor.assess_detailed(&natural, title, &["karasu"]).unwrap();
    let stuffed = assessor.assess_detailed(&stuffed, title, &["karasu"]).unwrap();
    assert!(natural.seo.points("keyword_density") > stuffed.seo.points("keyword_density"));
    assert!(stuffed.suggestions.contains(&Suggestion::ReduceKeywordDensity));
}

#[test]
fn test_repeated_calls_are_identical() {
    let title = "Karasu rehberi";
    let first = serde_json::to_string(&assess_content_quality(ARTICLE, title, &["karasu"]))
        .unwrap();
    for _ in 0..5 {
        let again = serde_json::to_string(&assess_content_quality(ARTICLE, title, &["karasu"]))
            .unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_detailed_assessment_serializes() {
    let assessment = QualityAssessor::new()
        .assess_detailed(ARTICLE, "Karasu rehberi", &["karasu"])
        .unwrap();
    let json = serde_json::to_value(&assessment).unwrap();
    assert!(json["report"]["overall"].is_u64());
    assert!(json["stats"]["word_count"].as_u64().unwrap() > 50);
    assert!(json["suggestions"].is_array());
}
