use eframe::egui;
use log::{error, info};

use slotbook_egui::ui::SlotBookApp;

fn create_app(
    cc: &eframe::CreationContext<'_>,
) -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    match SlotBookApp::new(cc) {
        Ok(app) => {
            info!("Successfully initialized SlotBook app");
            Ok(Box::new(app))
        }
        Err(e) => {
            error!("Failed to initialize app: {}", e);
            Err(format!("Failed to initialize app: {}", e).into())
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting SlotBook egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("SlotBook")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native("SlotBook", options, Box::new(create_app))
}
