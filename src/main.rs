use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;

use astrodeck::calc::{self, DistanceUnit};
use astrodeck::quiz::QuizSession;
use astrodeck::Portal;

fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("astrodeck starting up...");

    let portal = Portal::new()?;
    let today = Local::now().date_naive();

    println!("== Today in space history ==");
    match portal.catalog().event_on(today) {
        Some(event) => {
            println!("{} ({}, {})", event.title, event.year, event.category.as_str());
            println!("{}", event.description);
        }
        None => println!("No curated event for today; check back tomorrow."),
    }

    let picture = portal.catalog().picture_of_the_day(today);
    println!("\n== Astronomy picture of the day ==");
    println!("{} [{}]", picture.title, picture.category);
    println!("{}", picture.description);

    let quote = portal.catalog().quote_of_the_day(today);
    println!("\n== Quote of the day ==");
    println!("\"{}\" — {}", quote.quote, quote.author);

    println!("\n== If you are 30 Earth years old ==");
    for age in calc::age_on_planets(portal.catalog().planets(), 30.0) {
        println!("  {:<8} {:>5} years", age.planet, age.years);
    }

    let travel = calc::light_travel_time(1.0, DistanceUnit::AstronomicalUnits);
    println!(
        "\nSunlight reaches Earth in {:.1} minutes ({:.0} seconds).",
        travel.minutes, travel.seconds
    );

    let mut rng = rand::thread_rng();
    let bonus = portal.catalog().random_quote(&mut rng);
    println!("\nBonus quote: \"{}\" — {}", bonus.quote, bonus.author);

    // Demo player always picks the first option.
    let mut quiz = QuizSession::shuffled(portal.catalog().quiz_questions().to_vec(), &mut rng);
    let total = quiz.progress().1;
    while quiz.answer(0).is_some() {}
    println!(
        "Quiz demo: picking option A every time scores {}/{}.",
        quiz.score(),
        total
    );

    if portal.narrate_event(today).is_none() {
        portal.narrate_quote(today);
    }
    portal.narrate_picture(today);
    wait_for_narration(&portal, Duration::from_secs(20));

    Ok(())
}

/// Block until the active narration drains, or the timeout passes.
fn wait_for_narration(portal: &Portal, timeout: Duration) {
    let deadline = Instant::now() + timeout;
    while portal.narration().active_request().is_some() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(100));
    }
}
