#[cfg(feature = "gtk4-adapter")]
fn main() {
    use gtk4 as gtk;
    use gtk4::prelude::*;

    use rating_trend::api::{RatingTrendConfig, RatingTrendWidget};
    use rating_trend::core::Insets;
    use rating_trend::platform_gtk::GtkRatingTrendAdapter;

    let _ = rating_trend::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.rating_trend.examples.demo")
        .build();

    app.connect_activate(|app| {
        let widget = match RatingTrendWidget::new(RatingTrendConfig::default()) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("failed to initialize rating trend: {err}");
                return;
            }
        };

        let adapter = GtkRatingTrendAdapter::new(widget);
        adapter.set_padding(Insets::uniform(8));
        if let Err(err) = adapter.set_rating_sequence(&[5, 4, 2, 1, 2, 1, 1, 4]) {
            eprintln!("failed to set ratings: {err}");
            return;
        }

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("rating-trend | demo")
            .default_width(420)
            .default_height(120)
            .build();
        window.set_child(Some(adapter.drawing_area()));
        window.present();
    });

    let _ = app.run();
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_rating_trend_demo");
}
