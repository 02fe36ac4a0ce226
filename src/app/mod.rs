use anyhow::{anyhow, Result};
use eframe::egui::{self, Color32, RichText, TextEdit, Widget};
use eframe::{Frame, Storage};
use egui_extras::{Column, TableBuilder};
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy::MidpointAwayFromZero;

use calculator::{compound_interest, InterestRequest, InterestResult};
use config::Config;

mod calculator;
mod config;

pub struct App {
    cfg: Config,
    outcome: Option<Result<InterestResult>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            cfg: Config::default(),
            outcome: None,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let Config {
            principal,
            rate,
            compounds,
            years,
        } = &mut self.cfg;

        if let Some(Err(e)) = &self.outcome {
            egui::TopBottomPanel::top("warn_panel").show(ctx, |ui| {
                let warn = RichText::from(e.to_string()).color(Color32::RED);
                ui.label(warn);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Compound Interest Calculator");
            });
            ui.add_space(8.0);

            if TextEdit::singleline(principal)
                .hint_text("Principal amount")
                .desired_width(f32::INFINITY)
                .ui(ui)
                .changed()
            {
                retain_numeric(principal);
            }

            if TextEdit::singleline(rate)
                .hint_text("Rate of interest (%)")
                .desired_width(f32::INFINITY)
                .ui(ui)
                .changed()
            {
                retain_numeric(rate);
            }

            ui.columns(2, |cols| {
                if TextEdit::singleline(compounds)
                    .hint_text("Times compounded per year")
                    .desired_width(f32::INFINITY)
                    .ui(&mut cols[0])
                    .changed()
                {
                    retain_digits(compounds);
                }

                if TextEdit::singleline(years)
                    .hint_text("Years")
                    .desired_width(f32::INFINITY)
                    .ui(&mut cols[1])
                    .changed()
                {
                    retain_digits(years);
                }
            });

            ui.add_space(4.0);
            let status = match &self.outcome {
                None => "Awaiting inputs",
                Some(Ok(_)) => "Calculated",
                Some(Err(_)) => "Check your inputs",
            };
            ui.label(status);

            if ui.button("Calculate").clicked() {
                self.outcome = Some(evaluate(principal, rate, compounds, years));
            }

            ui.separator();

            let result = match &self.outcome {
                Some(Ok(r)) => Some(*r),
                _ => None,
            };

            let text_height = egui::TextStyle::Body.resolve(ui.style()).size * 2.0;
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::remainder())
                .column(Column::remainder())
                .body(|mut body| {
                    body.row(text_height, |mut row| {
                        row.col(|ui| {
                            ui.strong("Total returns");
                        });
                        row.col(|ui| {
                            ui.label(display(result.map(|r| r.total_amount)));
                        });
                    });
                    body.row(text_height, |mut row| {
                        row.col(|ui| {
                            ui.strong("Total interest");
                        });
                        row.col(|ui| {
                            ui.label(display(result.map(|r| r.total_interest)));
                        });
                    });
                });
        });

        egui::TopBottomPanel::bottom("bottom").show(ctx, |ui| {
            egui::widgets::global_theme_preference_switch(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.cfg);
    }
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.storage
            .and_then(|storage| eframe::get_value::<Config>(storage, eframe::APP_KEY))
            .map(|cfg| Self {
                cfg,
                ..Default::default()
            })
            .unwrap_or_default()
    }
}

/// Parses the four entry fields and runs the calculation. The rate field is
/// entered as a percentage and converted to a fraction here.
fn evaluate(principal: &str, rate: &str, compounds: &str, years: &str) -> Result<InterestResult> {
    let principal: Decimal = principal
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid principal amount"))?;
    let rate: Decimal = rate
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid rate of interest"))?;
    let compounds: u32 = compounds
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid times compounded"))?;
    let years: u32 = years
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid years"))?;

    let request = InterestRequest {
        principal,
        annual_rate: rate / Decimal::ONE_HUNDRED,
        compounds_per_year: compounds,
        years,
    };
    Ok(compound_interest(&request)?)
}

fn display(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{:.2}", v.round_dp_with_strategy(2, MidpointAwayFromZero)),
        None => "N/A".to_owned(),
    }
}

fn retain_numeric(text: &mut String) {
    text.retain(|c| c.is_ascii_digit() || c == '.');
}

fn retain_digits(text: &mut String) {
    text.retain(|c| c.is_ascii_digit());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_reads_rate_as_percentage() {
        let result = evaluate("500", "10", "1", "1").unwrap();
        assert_eq!(result.total_amount, Decimal::new(550, 0));
        assert_eq!(result.total_interest, Decimal::new(50, 0));
    }

    #[test]
    fn evaluate_names_the_field_that_failed_to_parse() {
        let cases = [
            (("1.2.3", "5", "12", "10"), "Invalid principal amount"),
            (("1000", "", "12", "10"), "Invalid rate of interest"),
            (("1000", "5", "1.5", "10"), "Invalid times compounded"),
            (("1000", "5", "12", "ten"), "Invalid years"),
        ];
        for ((p, r, n, t), msg) in cases {
            assert_eq!(evaluate(p, r, n, t).unwrap_err().to_string(), msg);
        }
    }

    #[test]
    fn evaluate_surfaces_core_validation_messages() {
        let err = evaluate("0", "5", "12", "10").unwrap_err();
        assert_eq!(err.to_string(), "principal must be greater than 0");

        let err = evaluate("1000", "0", "12", "10").unwrap_err();
        assert_eq!(err.to_string(), "rate must be greater than 0");
    }

    #[test]
    fn entry_filters_drop_non_numeric_characters() {
        let mut field = String::from("1,000.50abc");
        retain_numeric(&mut field);
        assert_eq!(field, "1000.50");

        let mut field = String::from("12.5y");
        retain_digits(&mut field);
        assert_eq!(field, "125");
    }

    #[test]
    fn display_rounds_only_at_the_boundary() {
        assert_eq!(display(Some(Decimal::new(16470095, 4))), "1647.01");
        assert_eq!(display(None), "N/A");
    }
}
