use crate::canvas::{inner_size, paint_scene};
use crate::session::{Reply, Session};
use crate::theme::{error_color, to_color32, visuals_for};
use calcvis_color::{kind_color, ColorScheme};
use calcvis_oracle::{AnalysisResult, Analyzer};
use calcvis_plot::{compose, PlotError, PlotInput, PlotScene, Viewport, FRAME_INSET};
use egui::{RichText, Sense, Vec2};
use log::{debug, error};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

const INPUT_HINT: &str = "Enter a mathematical expression (e.g., sin(x) + x^2)";
const PLOT_ASPECT: f32 = 4.0 / 3.0;

/// Last composed scene and the inputs it was composed from.
struct SceneCache {
    input: PlotInput,
    viewport: Viewport,
    scene: Result<PlotScene, PlotError>,
}

pub struct CalcvisApp {
    runtime: Runtime,
    analyzer: Arc<Analyzer>,
    replies_tx: UnboundedSender<Reply>,
    replies_rx: UnboundedReceiver<Reply>,
    session: Session,
    cache: Option<SceneCache>,
}

impl CalcvisApp {
    pub fn new(runtime: Runtime, analyzer: Analyzer, scheme: ColorScheme) -> Self {
        let (replies_tx, replies_rx) = unbounded_channel();
        Self {
            runtime,
            analyzer: Arc::new(analyzer),
            replies_tx,
            replies_rx,
            session: Session::new(scheme),
            cache: None,
        }
    }

    /// Start an independent request. Earlier in-flight requests are not
    /// cancelled.
    fn submit(&mut self, ctx: &egui::Context) {
        let Some(expression) = self.session.submit() else {
            return;
        };

        let analyzer = Arc::clone(&self.analyzer);
        let tx = self.replies_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = analyzer.analyze(&expression).await;
            if tx.send(Reply { expression, result }).is_err() {
                debug!("window closed before the reply arrived");
            }
            ctx.request_repaint();
        });
    }

    fn drain_replies(&mut self) {
        while let Ok(reply) = self.replies_rx.try_recv() {
            debug!("reply for {:?}", reply.expression);
            self.session.apply(reply);
        }
    }

    /// Recompose from scratch whenever the plot input or canvas size changed.
    fn scene_for(&mut self, input: PlotInput, viewport: Viewport) -> &Result<PlotScene, PlotError> {
        let stale = self
            .cache
            .as_ref()
            .map_or(true, |c| c.input != input || c.viewport != viewport);

        if stale {
            self.cache = None;
        }
        let cache = self.cache.get_or_insert_with(|| {
            let scene = compose(&input, viewport);
            if let Err(e) = &scene {
                error!("cannot plot {:?}: {}", input.expression, e);
            }
            SceneCache {
                input,
                viewport,
                scene,
            }
        });
        &cache.scene
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculus Image Generator");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = match self.session.scheme {
                    ColorScheme::Light => "Dark mode",
                    ColorScheme::Dark => "Light mode",
                };
                if ui.button(label).clicked() {
                    self.session.toggle_scheme();
                }
            });
        });
    }

    fn input_row(&mut self, ui: &mut egui::Ui) {
        ui.label("Create visualizations based on calculus expressions");
        ui.add_space(4.0);

        let mut submitted = false;
        ui.horizontal(|ui| {
            let field = ui.add(
                egui::TextEdit::singleline(&mut self.session.input)
                    .hint_text(INPUT_HINT)
                    .desired_width(ui.available_width() - 120.0),
            );
            if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }

            if self.session.is_loading() {
                ui.spinner();
                ui.label("Processing");
            } else if ui.button("Generate").clicked() {
                submitted = true;
            }
        });
        ui.small("Try functions like sin(x), x^2, e^x, or combinations");

        if submitted {
            self.submit(ui.ctx());
        }

        if let Some(message) = &self.session.error {
            ui.add_space(4.0);
            ui.colored_label(error_color(self.session.scheme), message);
        }
    }

    fn plot(&mut self, ui: &mut egui::Ui, input: PlotInput) {
        let width = ui.available_width();
        let outer = Vec2::new(width, width / PLOT_ASPECT);
        let (response, painter) = ui.allocate_painter(outer, Sense::hover());

        let size = inner_size(outer, FRAME_INSET as f32);
        let viewport = Viewport::new(f64::from(size.x), f64::from(size.y));

        match self.scene_for(input, viewport) {
            Ok(scene) => paint_scene(&painter, response.rect, scene),
            Err(e) => {
                painter.text(
                    response.rect.center(),
                    egui::Align2::CENTER_CENTER,
                    e.to_string(),
                    egui::FontId::proportional(16.0),
                    ui.visuals().error_fg_color,
                );
            }
        }
    }
}

fn details(ui: &mut egui::Ui, result: &AnalysisResult, scheme: ColorScheme) {
    ui.group(|ui| {
        ui.strong("Function Analysis");
        ui.add_space(4.0);

        ui.label("Expression");
        ui.monospace(format!("f(x) = {}", result.parsed));
        ui.label("Derivative");
        ui.monospace(format!("f'(x) = {}", result.derivative));
        ui.label("Integral");
        ui.monospace(format!("∫f(x)dx = {} + C", result.integral));

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(format!("Domain [{}, {}]", result.domain[0], result.domain[1]));
            ui.add_space(16.0);
            ui.label(format!("Range [{}, {}]", result.range[0], result.range[1]));
        });
    });

    ui.add_space(8.0);
    ui.group(|ui| {
        ui.strong("Critical Points");
        ui.add_space(4.0);

        if result.critical_points.is_empty() {
            ui.weak("No critical points found in the specified domain.");
            return;
        }
        for point in &result.critical_points {
            ui.horizontal(|ui| {
                let swatch = to_color32(kind_color(point.kind, scheme));
                ui.label(RichText::new("●").color(swatch));
                ui.label(RichText::new(format!("x = {:.2}", point.x)).strong());
                ui.label(capitalize(point.kind.name()));
            });
        }
    });
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl eframe::App for CalcvisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_replies();
        ctx.set_visuals(visuals_for(self.session.scheme));

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            self.header(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.input_row(ui);

                let Some(input) = self.session.plot_input() else {
                    return;
                };
                let result = self.session.result.clone();
                let scheme = self.session.scheme;

                ui.separator();
                ui.columns(2, |columns| {
                    columns[0].strong("Visualization");
                    self.plot(&mut columns[0], input);

                    columns[1].strong("Analysis");
                    if let Some(result) = &result {
                        details(&mut columns[1], result, scheme);
                    }
                });
            });
        });

        if self.session.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
