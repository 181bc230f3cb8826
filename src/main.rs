use anyhow::Result;
use isav_academy::config::Config;
use isav_academy::content::{default_team, ArticleQuery, Catalog};
use isav_academy::i18n::{FileStore, LocaleContext};
use isav_academy::render::{ArticleCard, CourseCard, TeamMemberCard};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("isav_academy=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let mut context = LocaleContext::init(FileStore::new(&config.preferences_path));
    info!(
        "Active locale: {} ({})",
        context.active_locale(),
        context.attributes().dir
    );

    if let Some(code) = &config.locale {
        context.switch_locale_code(code);
    }

    let catalog = Catalog::load(&config.content_path)?;

    // Render pass: everything below reads the locale once, through this view
    let view = context.view();

    let query = ArticleQuery {
        category: config.category.clone(),
        search: config.search.clone(),
        ..Default::default()
    };
    let articles = catalog.query_articles(&query, view.locale());

    println!("== {} ==", view.t("articles.latest"));
    for article in articles.iter().take(config.max_articles) {
        println!("{}\n", ArticleCard::render(article, &view));
    }

    if !catalog.courses.is_empty() {
        println!("== {} ==", view.t("courses.title"));
        for course in &catalog.courses {
            println!("{}\n", CourseCard::render(course, &view));
        }
    }

    let team = if catalog.team.is_empty() {
        default_team()
    } else {
        catalog.team.clone()
    };
    println!("== {} ==", view.t("about.team"));
    for member in &team {
        println!("{}\n", TeamMemberCard::render(member, &view));
    }

    println!("{}", view.t("footer.rights"));

    let report = context.table().metrics_report();
    info!(
        "Rendered {} articles; {} UI string lookups, {} missing ({:.1}%)",
        articles.len().min(config.max_articles),
        report.lookups,
        report.misses,
        report.miss_rate
    );

    Ok(())
}
