// * Taxonomy table
// ! Keywords are matched as raw substrings of lower-cased content. Keep them lower-case.

use super::{Cascade, Intent, LinkTarget, TaxonomyEntry, TaxonomyGroup, Trigger};

// * Shared targets (also referenced by the fallback set)
const SALE_LISTINGS: LinkTarget = LinkTarget {
    path: "/satilik",
    label: "Satılık İlanlar",
    description: "Tüm güncel satılık ev, daire ve villa ilanları",
    intent: Intent::Listing,
};

const RENT_LISTINGS: LinkTarget = LinkTarget {
    path: "/kiralik",
    label: "Kiralık İlanlar",
    description: "Uzun dönem kiralık ev ve daire ilanları",
    intent: Intent::Listing,
};

const GUIDE_HUB: LinkTarget = LinkTarget {
    path: "/rehber",
    label: "Emlak Rehberi",
    description: "Alım, satım ve kiralama süreçleri için rehber yazılar",
    intent: Intent::Guide,
};

const MORTGAGE_CALCULATOR: LinkTarget = LinkTarget {
    path: "/araclar/kredi-hesaplama",
    label: "Kredi Hesaplama",
    description: "Konut kredisi taksitlerini vade ve faize göre hesaplayın",
    intent: Intent::Tool,
};

const SUMMER_HOUSES: LinkTarget = LinkTarget {
    path: "/satilik-yazlik",
    label: "Satılık Yazlıklar",
    description: "Tatil sezonu için satılık yazlık evler",
    intent: Intent::Listing,
};

// * Nouns that make a transactional verb about property
const PROPERTY_NOUNS: &[&str] = &["ev", "house", "home", "daire", "konut", "apartment"];

const REGION: TaxonomyGroup = TaxonomyGroup {
    name: "region",
    priority: 10,
    entries: &[
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["karasu"]),
            targets: &[LinkTarget {
                path: "/karasu-satilik-ev",
                label: "Karasu Satılık Evler",
                description: "Karasu'daki güncel satılık ev ve daire ilanları",
                intent: Intent::Listing,
            }],
            cascades: &[],
        },
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["kocaali"]),
            targets: &[LinkTarget {
                path: "/kocaali-satilik-ev",
                label: "Kocaali Satılık Evler",
                description: "Kocaali'de denize yakın satılık konutlar",
                intent: Intent::Listing,
            }],
            cascades: &[],
        },
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["sapanca"]),
            targets: &[LinkTarget {
                path: "/sapanca-satilik-ev",
                label: "Sapanca Satılık Evler",
                description: "Sapanca Gölü çevresindeki satılık ev ve bungalovlar",
                intent: Intent::Listing,
            }],
            cascades: &[],
        },
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["sakarya"]),
            targets: &[LinkTarget {
                path: "/sakarya-emlak-rehberi",
                label: "Sakarya Emlak Rehberi",
                description: "Sakarya ilçelerinde bölge bölge konut piyasası",
                intent: Intent::Guide,
            }],
            cascades: &[],
        },
    ],
};

const THEMATIC: TaxonomyGroup = TaxonomyGroup {
    name: "thematic",
    priority: 20,
    entries: &[
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["deniz", "sahil", "seaside", "sea view", "beach"]),
            targets: &[LinkTarget {
                path: "/denize-yakin-satilik-evler",
                label: "Denize Yakın Satılık Evler",
                description: "Sahile yürüme mesafesindeki satılık evler",
                intent: Intent::Listing,
            }],
            cascades: &[],
        },
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["yatırım", "yatirim", "investment"]),
            targets: &[LinkTarget {
                path: "/yatirimlik-satilik-emlak",
                label: "Yatırımlık Gayrimenkuller",
                description: "Kira getirisi ve değer artışı potansiyeli yüksek ilanlar",
                intent: Intent::Listing,
            }],
            cascades: &[],
        },
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["villa"]),
            targets: &[LinkTarget {
                path: "/satilik-villa",
                label: "Satılık Villalar",
                description: "Bahçeli ve havuzlu satılık villa ilanları",
                intent: Intent::Listing,
            }],
            cascades: &[],
        },
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["yazlık", "yazlik", "summer house"]),
            targets: &[SUMMER_HOUSES],
            cascades: &[],
        },
    ],
};

const TRANSACTIONAL: TaxonomyGroup = TaxonomyGroup {
    name: "transactional",
    priority: 30,
    entries: &[
        TaxonomyEntry {
            trigger: Trigger::AllOf {
                primary: &["satın al", "almak", "alırken", "buy"],
                secondary: PROPERTY_NOUNS,
            },
            targets: &[LinkTarget {
                path: "/rehber/ev-nasil-alinir",
                label: "Ev Nasıl Alınır?",
                description: "Adım adım ev satın alma rehberi",
                intent: Intent::Guide,
            }],
            cascades: &[],
        },
        TaxonomyEntry {
            trigger: Trigger::AllOf {
                primary: &["satmak", "satarken", "sell"],
                secondary: PROPERTY_NOUNS,
            },
            targets: &[LinkTarget {
                path: "/rehber/ev-nasil-satilir",
                label: "Ev Nasıl Satılır?",
                description: "Evinizi doğru fiyata hızlıca satmanın yolları",
                intent: Intent::Guide,
            }],
            cascades: &[],
        },
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["satılık", "satilik", "for sale"]),
            targets: &[SALE_LISTINGS],
            cascades: &[],
        },
    ],
};

const DOMAIN: TaxonomyGroup = TaxonomyGroup {
    name: "domain",
    priority: 40,
    entries: &[
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["kiralık", "kiralik", "kira", "rent"]),
            targets: &[RENT_LISTINGS],
            cascades: &[],
        },
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["kredi", "mortgage"]),
            targets: &[
                LinkTarget {
                    path: "/rehber/konut-kredisi",
                    label: "Konut Kredisi Rehberi",
                    description: "Konut kredisi başvurusu, faiz ve vade seçimi",
                    intent: Intent::Guide,
                },
                MORTGAGE_CALCULATOR,
            ],
            cascades: &[],
        },
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["tapu", "deed"]),
            targets: &[LinkTarget {
                path: "/rehber/tapu-islemleri",
                label: "Tapu İşlemleri",
                description: "Tapu devri, harçlar ve gerekli belgeler",
                intent: Intent::Guide,
            }],
            cascades: &[],
        },
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["mahalle", "neighborhood", "neighbourhood"]),
            targets: &[LinkTarget {
                path: "/mahalleler",
                label: "Mahalle Rehberi",
                description: "Mahallelerin ulaşım, okul ve sosyal olanakları",
                intent: Intent::Guide,
            }],
            cascades: &[],
        },
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["değerleme", "ekspertiz", "valuation"]),
            targets: &[LinkTarget {
                path: "/araclar/ev-degeri-hesaplama",
                label: "Ev Değeri Hesaplama",
                description: "Evinizin güncel piyasa değerini tahmin edin",
                intent: Intent::Tool,
            }],
            cascades: &[],
        },
    ],
};

const SEASONAL: TaxonomyGroup = TaxonomyGroup {
    name: "seasonal",
    priority: 50,
    entries: &[
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["ramazan", "ramadan"]),
            targets: &[
                LinkTarget {
                    path: "/ramazan",
                    label: "Ramazan Rehberi",
                    description: "Ramazan ayı boyunca Karasu'da yaşam ve etkinlikler",
                    intent: Intent::Guide,
                },
                LinkTarget {
                    path: "/ramazan/zekat-hesaplama",
                    label: "Zekat Hesaplama",
                    description: "Gayrimenkul ve birikimler için zekat tutarını hesaplayın",
                    intent: Intent::Tool,
                },
            ],
            cascades: &[
                Cascade {
                    keywords: &["iftar"],
                    targets: &[LinkTarget {
                        path: "/ramazan/iftar-vakti",
                        label: "İftara Ne Kadar Kaldı?",
                        description: "Bugünün iftar vaktine geri sayım",
                        intent: Intent::Tool,
                    }],
                },
                Cascade {
                    keywords: &["imsak", "sahur"],
                    targets: &[LinkTarget {
                        path: "/ramazan/imsakiye",
                        label: "İmsakiye",
                        description: "Günlük imsak ve iftar saatleri",
                        intent: Intent::Tool,
                    }],
                },
            ],
        },
        TaxonomyEntry {
            trigger: Trigger::AnyOf(&["bayram", "tatil", "holiday"]),
            targets: &[
                LinkTarget {
                    path: "/tatil-rehberi",
                    label: "Tatil Rehberi",
                    description: "Bayram ve yaz tatilinde Karasu'da konaklama",
                    intent: Intent::Guide,
                },
                SUMMER_HOUSES,
            ],
            cascades: &[Cascade {
                keywords: &["günlük kiralık", "gunluk kiralik", "daily rental"],
                targets: &[LinkTarget {
                    path: "/gunluk-kiralik",
                    label: "Günlük Kiralık Evler",
                    description: "Tatil dönemi için günlük kiralık ev ve apartlar",
                    intent: Intent::Listing,
                }],
            }],
        },
    ],
};

/// The full taxonomy. Detection order is decided by `priority`, not position here.
pub static TAXONOMY: &[TaxonomyGroup] = &[REGION, THEMATIC, TRANSACTIONAL, DOMAIN, SEASONAL];

/// Always-available links used to top up sparse results, in append order
pub static FALLBACK_TARGETS: &[LinkTarget] =
    &[SALE_LISTINGS, RENT_LISTINGS, GUIDE_HUB, MORTGAGE_CALCULATOR];
