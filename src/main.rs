// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//   + options ligne de commande (--config, --log-level) + journal tracing
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use calculatrice_touches::EngineConfig;

    #[derive(Debug, Parser)]
    #[command(version, about = "Calculatrice à touches (natif)")]
    pub struct Args {
        /// Fichier TOML : max_input_digits, max_result_digits
        #[arg(long, env = "CALCULATRICE_CONFIG")]
        pub config: Option<PathBuf>,

        /// Niveau de journal si RUST_LOG est absent (trace, debug, info, warn, error)
        #[arg(long, default_value = "info")]
        pub log_level: String,
    }

    /// RUST_LOG prioritaire, sinon --log-level, sinon "info".
    pub fn init_journal(niveau: &str) {
        let filtre = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(niveau))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_target(true)
            .init();
    }

    pub fn charger_config(args: &Args) -> anyhow::Result<EngineConfig> {
        match &args.config {
            Some(chemin) => EngineConfig::from_file(chemin)
                .with_context(|| format!("configuration {}", chemin.display())),
            None => Ok(EngineConfig::default()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    let args = natif::Args::parse();
    natif::init_journal(&args.log_level);

    let config = natif::charger_config(&args)?;
    tracing::info!(
        max_input_digits = config.max_input_digits,
        max_result_digits = config.max_result_digits,
        "démarrage"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([320.0, 480.0])
            .with_min_inner_size([300.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (configuration par défaut)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
