//! Demonstration records, inserted through the public store operations the
//! same way any other caller would.

use aflam_catalog::CatalogStore;
use aflam_catalog::categories::NewCategory;
use aflam_catalog::episodes::NewEpisode;
use aflam_catalog::movies::NewMovie;
use aflam_catalog::series::NewSeries;
use aflam_core::types::{ContentKind, SeriesStatus};

/// Counts of seeded records per kind.
pub struct SeedReport {
    pub movies: usize,
    pub series: usize,
    pub episodes: usize,
    pub categories: usize,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(name: &str, name_ar: &str, icon: &str) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        name_ar: name_ar.to_string(),
        kind: ContentKind::Movie,
        icon: Some(icon.to_string()),
    }
}

pub fn seed_demo_catalog(catalog: &CatalogStore) -> SeedReport {
    let categories = vec![
        category("Action", "أكشن", "🎬"),
        category("Drama", "دراما", "🎭"),
        category("Comedy", "كوميدي", "😂"),
        category("Romance", "رومانسي", "💕"),
        category("Thriller", "إثارة", "🔥"),
    ];

    let movies = vec![
        NewMovie {
            title: "The Dark Knight".to_string(),
            title_ar: "فارس الظلام".to_string(),
            description: Some(
                "When the menace known as the Joker wreaks havoc and chaos on the people of \
                 Gotham, Batman must accept one of the greatest psychological and physical tests \
                 of his ability to fight injustice."
                    .to_string(),
            ),
            description_ar: Some(
                "عندما يعيث الجوكر فساداً وفوضى في مدينة جوثام، يجب على باتمان أن يخوض واحداً من \
                 أعظم الاختبارات النفسية والجسدية لقدرته على محاربة الظلم."
                    .to_string(),
            ),
            poster_url: None,
            trailer_url: None,
            year: Some(2008),
            rating: Some("9.0".to_string()),
            genre: Some(strings(&["أكشن", "دراما", "إثارة"])),
            director: Some("Christopher Nolan".to_string()),
            actors: Some(strings(&[
                "Christian Bale",
                "Heath Ledger",
                "Aaron Eckhart",
            ])),
            duration: Some(152),
            quality: "HD".to_string(),
            language: "English".to_string(),
            subtitles: strings(&["Arabic"]),
            featured: true,
        },
        NewMovie {
            title: "Inception".to_string(),
            title_ar: "البداية".to_string(),
            description: Some(
                "A thief who steals corporate secrets through dream-sharing technology is given \
                 the inverse task of planting an idea into the mind of a C.E.O."
                    .to_string(),
            ),
            description_ar: Some(
                "لص يسرق أسرار الشركات من خلال تقنية تبادل الأحلام، يُكلف بمهمة معاكسة وهي زرع \
                 فكرة في عقل رئيس تنفيذي."
                    .to_string(),
            ),
            poster_url: None,
            trailer_url: None,
            year: Some(2010),
            rating: Some("8.8".to_string()),
            genre: Some(strings(&["أكشن", "خيال علمي", "إثارة"])),
            director: Some("Christopher Nolan".to_string()),
            actors: Some(strings(&[
                "Leonardo DiCaprio",
                "Marion Cotillard",
                "Tom Hardy",
            ])),
            duration: Some(148),
            quality: "HD".to_string(),
            language: "English".to_string(),
            subtitles: strings(&["Arabic"]),
            featured: true,
        },
        NewMovie {
            title: "The Shawshank Redemption".to_string(),
            title_ar: "الخلاص من شاوشانك".to_string(),
            description: Some(
                "Two imprisoned mates bond over a number of years, finding solace and eventual \
                 redemption through acts of common decency."
                    .to_string(),
            ),
            description_ar: Some(
                "صديقان مسجونان يتآلفان على مدى عدة سنوات، يجدان العزاء والخلاص النهائي من خلال \
                 أعمال اللطف المشتركة."
                    .to_string(),
            ),
            poster_url: None,
            trailer_url: None,
            year: Some(1994),
            rating: Some("9.3".to_string()),
            genre: Some(strings(&["دراما"])),
            director: Some("Frank Darabont".to_string()),
            actors: Some(strings(&["Tim Robbins", "Morgan Freeman", "Bob Gunton"])),
            duration: Some(142),
            quality: "HD".to_string(),
            language: "English".to_string(),
            subtitles: strings(&["Arabic"]),
            featured: true,
        },
        NewMovie {
            title: "Parasite".to_string(),
            title_ar: "الطفيلي".to_string(),
            description: Some(
                "A poor family schemes to become employed by a wealthy family by infiltrating \
                 their household and posing as unrelated, highly qualified individuals."
                    .to_string(),
            ),
            description_ar: Some(
                "عائلة فقيرة تخطط للعمل لدى عائلة ثرية عن طريق التسلل إلى منزلهم والتظاهر بأنهم \
                 أفراد غير مرتبطين وذوي مؤهلات عالية."
                    .to_string(),
            ),
            poster_url: None,
            trailer_url: None,
            year: Some(2019),
            rating: Some("8.5".to_string()),
            genre: Some(strings(&["دراما", "إثارة", "كوميدي"])),
            director: Some("Bong Joon-ho".to_string()),
            actors: Some(strings(&["Song Kang-ho", "Lee Sun-kyun", "Cho Yeo-jeong"])),
            duration: Some(132),
            quality: "HD".to_string(),
            language: "Korean".to_string(),
            subtitles: strings(&["Arabic", "English"]),
            featured: false,
        },
    ];

    let series_list = vec![
        NewSeries {
            title: "Breaking Bad".to_string(),
            title_ar: "بريكينغ باد".to_string(),
            description: Some(
                "A high school chemistry teacher diagnosed with inoperable lung cancer turns to \
                 manufacturing and selling methamphetamine in order to secure his family's future."
                    .to_string(),
            ),
            description_ar: Some(
                "أستاذ كيمياء في المدرسة الثانوية يُشخص بسرطان رئة لا يمكن علاجه، فيتحول إلى \
                 تصنيع وبيع المخدرات لتأمين مستقبل عائلته."
                    .to_string(),
            ),
            poster_url: None,
            year: Some(2008),
            rating: Some("9.5".to_string()),
            genre: Some(strings(&["دراما", "إثارة", "جريمة"])),
            actors: Some(strings(&["Bryan Cranston", "Aaron Paul", "Anna Gunn"])),
            seasons: Some(5),
            episodes: Some(62),
            status: SeriesStatus::Completed,
            language: "English".to_string(),
            featured: true,
        },
        NewSeries {
            title: "Game of Thrones".to_string(),
            title_ar: "صراع العروش".to_string(),
            description: Some(
                "Nine noble families wage war against each other in order to gain control over \
                 the mythical land of Westeros."
                    .to_string(),
            ),
            description_ar: Some(
                "تسع عائلات نبيلة تخوض حرباً ضد بعضها البعض للسيطرة على الأرض الأسطورية ويستروس."
                    .to_string(),
            ),
            poster_url: None,
            year: Some(2011),
            rating: Some("9.2".to_string()),
            genre: Some(strings(&["دراما", "فانتازيا", "مغامرات"])),
            actors: Some(strings(&["Emilia Clarke", "Peter Dinklage", "Kit Harington"])),
            seasons: Some(8),
            episodes: Some(73),
            status: SeriesStatus::Completed,
            language: "English".to_string(),
            featured: true,
        },
        NewSeries {
            title: "Stranger Things".to_string(),
            title_ar: "أشياء غريبة".to_string(),
            description: Some(
                "When a young boy disappears, his mother, a police chief and his friends must \
                 confront terrifying supernatural forces in order to get him back."
                    .to_string(),
            ),
            description_ar: Some(
                "عندما يختفي صبي صغير، يجب على والدته ورئيس الشرطة وأصدقائه مواجهة قوى خارقة \
                 للطبيعة مرعبة لاستعادته."
                    .to_string(),
            ),
            poster_url: None,
            year: Some(2016),
            rating: Some("8.7".to_string()),
            genre: Some(strings(&["دراما", "خيال علمي", "رعب"])),
            actors: Some(strings(&[
                "Millie Bobby Brown",
                "Finn Wolfhard",
                "Winona Ryder",
            ])),
            seasons: Some(4),
            episodes: Some(42),
            status: SeriesStatus::Ongoing,
            language: "English".to_string(),
            featured: true,
        },
    ];

    let report = SeedReport {
        movies: movies.len(),
        series: series_list.len(),
        episodes: 3,
        categories: categories.len(),
    };

    for c in categories {
        catalog.create_category(c);
    }
    for m in movies {
        catalog.create_movie(m);
    }
    let mut first_series_id = 1;
    for (i, s) in series_list.into_iter().enumerate() {
        let created = catalog.create_series(s);
        if i == 0 {
            first_series_id = created.id;
        }
    }

    // Season one openers of the first seeded series.
    let episodes = vec![
        NewEpisode {
            series_id: first_series_id,
            title: "Pilot".to_string(),
            title_ar: "الحلقة التجريبية".to_string(),
            season: 1,
            episode: 1,
            description: Some(
                "Walter White, a struggling high school chemistry teacher, is diagnosed with \
                 advanced lung cancer."
                    .to_string(),
            ),
            duration: Some(58),
            video_url: None,
            thumbnail_url: None,
            quality: "HD".to_string(),
        },
        NewEpisode {
            series_id: first_series_id,
            title: "Cat's in the Bag...".to_string(),
            title_ar: "القطة في الحقيبة...".to_string(),
            season: 1,
            episode: 2,
            description: Some(
                "Walt and Jesse attempt to tie up loose ends. The desperate situation gets more \
                 complicated with the flip of a coin."
                    .to_string(),
            ),
            duration: Some(48),
            video_url: None,
            thumbnail_url: None,
            quality: "HD".to_string(),
        },
        NewEpisode {
            series_id: first_series_id,
            title: "...And the Bag's in the River".to_string(),
            title_ar: "...والحقيبة في النهر".to_string(),
            season: 1,
            episode: 3,
            description: Some(
                "Walter faces a dilemma as he and Jesse work to dispose of their captive, \
                 Krazy-8."
                    .to_string(),
            ),
            duration: Some(48),
            video_url: None,
            thumbnail_url: None,
            quality: "HD".to_string(),
        },
    ];
    for e in episodes {
        catalog.create_episode(e);
    }

    report
}
