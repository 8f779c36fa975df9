use std::path::PathBuf;
use std::time::Duration;

use iced::widget::{Space, button, column, pick_list, row, scrollable, text, text_input};
use iced::{Element, Length, Task};

use viralens_core::{
    AnalysisInput, AnalysisResult, GateError, GeminiClient, InlineMedia, Lang, Platform, Provider,
    Scene, Session, Strings, analyze_prompt, analyze_video, generate_script, is_owner_token,
    media::VIDEO_EXTENSIONS,
    pricing::{CATALOG, PROCESSING_DELAY, tier},
    strings,
};

/// How long the "Copied!" acknowledgment stays on the copy button.
const COPY_ACK: Duration = Duration::from_secs(2);

fn main() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title("Viralens")
        .run()
}

/// Mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Selection,
    Loading,
    Result,
}

/// Lifecycle of the on-demand scene script. Collapsing drops the scenes;
/// regenerating runs a fresh call without re-running the audit.
#[derive(Debug, Clone, PartialEq)]
enum ScriptState {
    Hidden,
    Loading,
    Ready(Vec<Scene>),
    Empty,
}

struct App {
    lang: Lang,
    provider: Provider,
    session: Session,
    idea_text: String,
    picked_video: Option<PathBuf>,
    view: View,
    result: Option<AnalysisResult>,
    script: ScriptState,
    pricing_open: bool,
    purchasing: Option<&'static str>,
    caption_copied: bool,
    notice: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    PlatformPicked(Platform),
    IdeaChanged(String),
    BrowseVideo,
    VideoPicked(Option<PathBuf>),
    ClearVideo,
    Submit,
    AnalysisDone(Result<AnalysisResult, String>),
    RequestScript,
    ScriptDone(Result<Vec<Scene>, String>),
    HideScript,
    CopyCaption,
    CopyAcknowledged,
    Reset,
    OpenPricing,
    ClosePricing,
    Purchase(&'static str),
    PurchaseSettled(&'static str),
    DismissNotice,
}

/// Owner mode comes from a `--unlock <token>` launch argument, read once.
fn owner_mode_from_args() -> bool {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--unlock" {
            return args.next().as_deref().is_some_and(is_owner_token);
        }
    }
    false
}

async fn pick_video_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .add_filter("Video", &VIDEO_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// The whole audit round-trip, off the UI thread. The credential check runs
/// before any network attempt; every failure collapses to a display string
/// because the view only ever shows the generic notice.
async fn run_analysis(
    provider: Provider,
    input: AnalysisInput,
    platform: Platform,
    lang: Lang,
) -> Result<AnalysisResult, String> {
    let client = GeminiClient::new(provider).map_err(|e| e.to_string())?;
    match input {
        AnalysisInput::Idea(text) => analyze_prompt(&client, &text, platform, lang)
            .await
            .map_err(|e| e.to_string()),
        AnalysisInput::Video(path) => {
            let media = InlineMedia::from_path(&path)
                .await
                .map_err(|e| e.to_string())?;
            analyze_video(&client, media, platform, lang)
                .await
                .map_err(|e| e.to_string())
        }
    }
}

async fn run_script(
    provider: Provider,
    visual_concept: String,
    lang: Lang,
    video: Option<PathBuf>,
) -> Result<Vec<Scene>, String> {
    let client = GeminiClient::new(provider).map_err(|e| e.to_string())?;
    let media = match video {
        Some(path) => Some(
            InlineMedia::from_path(&path)
                .await
                .map_err(|e| e.to_string())?,
        ),
        None => None,
    };
    generate_script(&client, &visual_concept, lang, media)
        .await
        .map_err(|e| e.to_string())
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let app = Self {
            lang: Lang::default(),
            provider: Provider::default(),
            session: Session::new(owner_mode_from_args()),
            idea_text: String::new(),
            picked_video: None,
            view: View::Selection,
            result: None,
            script: ScriptState::Hidden,
            pricing_open: false,
            purchasing: None,
            caption_copied: false,
            notice: None,
        };
        (app, Task::none())
    }

    fn ui(&self) -> &'static Strings {
        strings(self.lang)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PlatformPicked(platform) => {
                self.session.select_platform(platform);
                Task::none()
            }
            Message::IdeaChanged(idea) => {
                self.idea_text = idea;
                Task::none()
            }
            Message::BrowseVideo => Task::perform(pick_video_file(), Message::VideoPicked),
            Message::VideoPicked(path) => {
                if path.is_some() {
                    self.picked_video = path;
                }
                Task::none()
            }
            Message::ClearVideo => {
                self.picked_video = None;
                Task::none()
            }
            Message::Submit => {
                let input = match &self.picked_video {
                    Some(path) => AnalysisInput::Video(path.clone()),
                    None => AnalysisInput::Idea(self.idea_text.clone()),
                };
                match self.session.begin(&input) {
                    Ok(platform) => {
                        self.view = View::Loading;
                        self.notice = None;
                        Task::perform(
                            run_analysis(self.provider, input, platform, self.lang),
                            Message::AnalysisDone,
                        )
                    }
                    Err(GateError::OutOfCredits) => {
                        self.pricing_open = true;
                        Task::none()
                    }
                    Err(gate) => {
                        self.notice = Some(self.gate_message(gate).to_string());
                        Task::none()
                    }
                }
            }
            Message::AnalysisDone(Ok(result)) => {
                self.session.complete();
                self.result = Some(result);
                self.script = ScriptState::Hidden;
                self.caption_copied = false;
                self.view = View::Result;
                Task::none()
            }
            Message::AnalysisDone(Err(_)) => {
                self.session.fail();
                self.view = View::Selection;
                self.notice = Some(self.ui().error_generic.to_string());
                Task::none()
            }
            Message::RequestScript => {
                if self.script == ScriptState::Loading {
                    return Task::none();
                }
                let Some(result) = &self.result else {
                    return Task::none();
                };
                let concept = result.visual_data.clone();
                self.script = ScriptState::Loading;
                Task::perform(
                    run_script(self.provider, concept, self.lang, self.picked_video.clone()),
                    Message::ScriptDone,
                )
            }
            Message::ScriptDone(Ok(scenes)) => {
                if scenes.is_empty() {
                    self.script = ScriptState::Empty;
                    self.notice = Some(self.ui().no_scenes.to_string());
                } else {
                    self.script = ScriptState::Ready(scenes);
                }
                Task::none()
            }
            Message::ScriptDone(Err(_)) => {
                self.script = ScriptState::Hidden;
                self.notice = Some(self.ui().error_generic.to_string());
                Task::none()
            }
            Message::HideScript => {
                self.script = ScriptState::Hidden;
                Task::none()
            }
            Message::CopyCaption => match &self.result {
                Some(result) => {
                    self.caption_copied = true;
                    Task::batch([
                        iced::clipboard::write(result.caption.clone()),
                        Task::perform(async { tokio::time::sleep(COPY_ACK).await }, |_| {
                            Message::CopyAcknowledged
                        }),
                    ])
                }
                None => Task::none(),
            },
            Message::CopyAcknowledged => {
                self.caption_copied = false;
                Task::none()
            }
            Message::Reset => {
                self.result = None;
                self.script = ScriptState::Hidden;
                self.idea_text.clear();
                self.picked_video = None;
                self.caption_copied = false;
                self.notice = None;
                self.view = View::Selection;
                Task::none()
            }
            Message::OpenPricing => {
                self.pricing_open = true;
                Task::none()
            }
            Message::ClosePricing => {
                if self.purchasing.is_none() {
                    self.pricing_open = false;
                }
                Task::none()
            }
            Message::Purchase(tier_id) => {
                if self.purchasing.is_some() {
                    return Task::none();
                }
                self.purchasing = Some(tier_id);
                Task::perform(
                    async { tokio::time::sleep(PROCESSING_DELAY).await },
                    move |_| Message::PurchaseSettled(tier_id),
                )
            }
            Message::PurchaseSettled(tier_id) => {
                if let Some(t) = tier(tier_id) {
                    self.session.ledger_mut().grant(t.credits);
                }
                self.purchasing = None;
                self.pricing_open = false;
                self.notice = Some(self.ui().purchase_success.to_string());
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    fn gate_message(&self, gate: GateError) -> &'static str {
        let ui = self.ui();
        match gate {
            GateError::NoPlatform => ui.error_no_platform,
            GateError::EmptyIdea => ui.error_empty_idea,
            GateError::Busy => ui.error_busy,
            GateError::OutOfCredits => ui.pricing_title,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let ui = self.ui();

        let mut page = column![self.header(ui)].spacing(16).padding(24);

        if let Some(notice) = &self.notice {
            page = page.push(
                row![
                    text(notice.clone()).size(14),
                    Space::new().width(Length::Fill),
                    button(text("x")).on_press(Message::DismissNotice),
                ]
                .spacing(10),
            );
        }

        let body: Element<'_, Message> = if self.pricing_open {
            self.pricing_view(ui)
        } else {
            match self.view {
                View::Selection => self.selection_view(ui),
                View::Loading => self.loading_view(ui),
                View::Result => self.result_view(ui),
            }
        };
        page = page.push(body);

        scrollable(page).into()
    }

    fn header(&self, ui: &'static Strings) -> Element<'_, Message> {
        let ledger = self.session.ledger();
        let badge = if ledger.owner_mode() {
            ui.unlimited.to_string()
        } else {
            format!("{} {}", ledger.balance(), ui.credits_label)
        };

        row![
            text(ui.app_title).size(28),
            Space::new().width(Length::Fill),
            text(badge).size(16),
            button(text(ui.get_credits).size(14)).on_press(Message::OpenPricing),
        ]
        .spacing(12)
        .into()
    }

    fn selection_view(&self, ui: &'static Strings) -> Element<'_, Message> {
        let video_row = match &self.picked_video {
            Some(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                row![
                    button(text(name)).on_press(Message::BrowseVideo),
                    button(text("x")).on_press(Message::ClearVideo),
                ]
            }
            None => row![button(text(ui.upload_video)).on_press(Message::BrowseVideo)],
        }
        .spacing(10);

        column![
            text(ui.tagline).size(16),
            pick_list(
                Platform::ALL,
                self.session.platform(),
                Message::PlatformPicked
            )
            .placeholder(ui.pick_platform),
            text_input(ui.idea_placeholder, &self.idea_text)
                .on_input(Message::IdeaChanged)
                .padding(10),
            video_row,
            button(text(ui.analyze)).on_press(Message::Submit).padding(12),
        ]
        .spacing(14)
        .into()
    }

    fn loading_view(&self, ui: &'static Strings) -> Element<'_, Message> {
        column![text(ui.analyzing).size(18)].spacing(14).into()
    }

    fn result_view(&self, ui: &'static Strings) -> Element<'_, Message> {
        let Some(result) = &self.result else {
            return self.selection_view(ui);
        };

        let score = match result.score_value() {
            Some(value) => format!("{value}/100"),
            None => result.score.clone(),
        };

        let copy_label = if self.caption_copied {
            ui.copied
        } else {
            ui.copy_caption
        };

        let mut sections = column![
            text(result.title.clone()).size(24),
            text(score).size(20),
            text(result.analysis.clone()).size(15),
            text(format!(
                "{} · {}",
                result.platform_suggestion, result.idea_duration
            ))
            .size(14),
            text(result.caption.clone()).size(14),
            row![button(text(copy_label)).on_press(Message::CopyCaption)],
            text(result.hashtags.join(" ")).size(14),
            text(result.visual_data.clone()).size(14),
        ]
        .spacing(12);

        sections = sections.push(self.script_section(ui));
        sections = sections.push(button(text(ui.new_analysis)).on_press(Message::Reset));
        sections.into()
    }

    fn script_section(&self, ui: &'static Strings) -> Element<'_, Message> {
        match &self.script {
            ScriptState::Hidden => {
                row![button(text(ui.generate_script)).on_press(Message::RequestScript)].into()
            }
            ScriptState::Loading => text(ui.script_loading).size(14).into(),
            ScriptState::Empty => column![
                text(ui.no_scenes).size(14),
                button(text(ui.regenerate_script)).on_press(Message::RequestScript),
            ]
            .spacing(8)
            .into(),
            ScriptState::Ready(scenes) => {
                let mut script = column![].spacing(8);
                for scene in scenes {
                    script = script.push(
                        text(format!("Scene {} · {}", scene.scene, scene.duration)).size(16),
                    );
                    script = script.push(text(scene.description.clone()).size(14));
                    script = script.push(text(format!("Audio: {}", scene.audio_sfx)).size(13));
                }
                column![
                    script,
                    row![
                        button(text(ui.hide_script)).on_press(Message::HideScript),
                        button(text(ui.regenerate_script)).on_press(Message::RequestScript),
                    ]
                    .spacing(10),
                ]
                .spacing(10)
                .into()
            }
        }
    }

    fn pricing_view(&self, ui: &'static Strings) -> Element<'_, Message> {
        let mut tiers = column![].spacing(12);
        for t in &CATALOG {
            let mut title_row = row![text(t.name).size(18)].spacing(8);
            if t.popular {
                title_row = title_row.push(text(ui.popular).size(12));
            }

            let mut card = column![title_row, text(t.price).size(16)].spacing(6);
            for feature in t.features {
                card = card.push(text(*feature).size(13));
            }

            let buy_label = if self.purchasing == Some(t.id) {
                ui.processing
            } else {
                ui.buy
            };
            card = card.push(button(text(buy_label)).on_press(Message::Purchase(t.id)));

            tiers = tiers.push(card);
        }

        column![
            text(ui.pricing_title).size(22),
            text(ui.pricing_subtitle).size(15),
            tiers,
            button(text(ui.close)).on_press(Message::ClosePricing),
        ]
        .spacing(14)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viralens_core::STARTING_BALANCE;

    fn app() -> App {
        App::new().0
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            score: "82".to_string(),
            title: "Home workouts that actually stick".to_string(),
            analysis: "Relatable hook.".to_string(),
            caption: "Most workout advice fails...".to_string(),
            hashtags: vec!["#homeworkout".to_string()],
            visual_data: "Split screen concept.".to_string(),
            platform_suggestion: "LinkedIn".to_string(),
            idea_duration: "45-60s".to_string(),
        }
    }

    fn submit_idea(app: &mut App, idea: &str) {
        let _ = app.update(Message::IdeaChanged(idea.to_string()));
        let _ = app.update(Message::Submit);
    }

    #[test]
    fn successful_idea_audit_spends_a_credit_and_shows_the_result() {
        let mut app = app();
        let _ = app.update(Message::PlatformPicked(Platform::Linkedin));
        submit_idea(&mut app, "home workout tips");
        assert_eq!(app.view, View::Loading);

        let _ = app.update(Message::AnalysisDone(Ok(sample_result())));
        assert_eq!(app.view, View::Result);
        assert_eq!(app.session.ledger().balance(), STARTING_BALANCE - 1);
        assert!(app.result.is_some());
    }

    #[test]
    fn failed_audit_returns_to_selection_with_a_notice_and_spends_nothing() {
        let mut app = app();
        let _ = app.update(Message::PlatformPicked(Platform::Tiktok));
        submit_idea(&mut app, "an idea");

        let _ = app.update(Message::AnalysisDone(Err("boom".to_string())));
        assert_eq!(app.view, View::Selection);
        assert_eq!(app.session.ledger().balance(), STARTING_BALANCE);
        assert!(app.notice.is_some());
    }

    #[test]
    fn exhausted_credits_open_the_pricing_surface_without_dispatching() {
        let mut app = app();
        let _ = app.update(Message::PlatformPicked(Platform::Youtube));
        for _ in 0..STARTING_BALANCE {
            submit_idea(&mut app, "idea");
            let _ = app.update(Message::AnalysisDone(Ok(sample_result())));
            let _ = app.update(Message::Reset);
        }
        assert_eq!(app.session.ledger().balance(), 0);

        submit_idea(&mut app, "one more");
        assert!(app.pricing_open);
        assert_eq!(app.view, View::Selection);
        assert_eq!(app.session.ledger().balance(), 0);
    }

    #[test]
    fn submit_without_platform_shows_a_notice() {
        let mut app = app();
        submit_idea(&mut app, "idea");
        assert_eq!(app.view, View::Selection);
        assert!(app.notice.is_some());
        assert!(!app.pricing_open);
    }

    #[test]
    fn reset_clears_result_script_and_inputs() {
        let mut app = app();
        let _ = app.update(Message::PlatformPicked(Platform::Instagram));
        submit_idea(&mut app, "idea");
        let _ = app.update(Message::AnalysisDone(Ok(sample_result())));
        let _ = app.update(Message::ScriptDone(Ok(vec![Scene {
            scene: 1,
            description: "Open".to_string(),
            audio_sfx: "Whoosh".to_string(),
            duration: "3s".to_string(),
        }])));

        let _ = app.update(Message::Reset);
        assert_eq!(app.view, View::Selection);
        assert!(app.result.is_none());
        assert_eq!(app.script, ScriptState::Hidden);
        assert!(app.idea_text.is_empty());
        assert!(app.picked_video.is_none());
    }

    #[test]
    fn empty_scene_list_surfaces_the_no_scenes_outcome() {
        let mut app = app();
        let _ = app.update(Message::PlatformPicked(Platform::Tiktok));
        submit_idea(&mut app, "idea");
        let _ = app.update(Message::AnalysisDone(Ok(sample_result())));

        let _ = app.update(Message::ScriptDone(Ok(vec![])));
        assert_eq!(app.script, ScriptState::Empty);
        assert!(app.notice.is_some());
    }

    #[test]
    fn hiding_the_script_drops_the_scenes_but_keeps_the_result() {
        let mut app = app();
        let _ = app.update(Message::PlatformPicked(Platform::Tiktok));
        submit_idea(&mut app, "idea");
        let _ = app.update(Message::AnalysisDone(Ok(sample_result())));
        let _ = app.update(Message::ScriptDone(Ok(vec![Scene {
            scene: 1,
            description: "Open".to_string(),
            audio_sfx: "Whoosh".to_string(),
            duration: "3s".to_string(),
        }])));

        let _ = app.update(Message::HideScript);
        assert_eq!(app.script, ScriptState::Hidden);
        assert!(app.result.is_some());
    }

    #[test]
    fn simulated_purchase_grants_the_tier_credits_and_closes_pricing() {
        let mut app = app();
        let _ = app.update(Message::OpenPricing);
        let _ = app.update(Message::Purchase("starter"));
        assert_eq!(app.purchasing, Some("starter"));

        let _ = app.update(Message::PurchaseSettled("starter"));
        assert_eq!(app.session.ledger().balance(), STARTING_BALANCE + 50);
        assert!(!app.pricing_open);
        assert!(app.notice.is_some());
    }

    #[test]
    fn copy_acknowledgment_is_transient() {
        let mut app = app();
        let _ = app.update(Message::PlatformPicked(Platform::Youtube));
        submit_idea(&mut app, "idea");
        let _ = app.update(Message::AnalysisDone(Ok(sample_result())));

        let _ = app.update(Message::CopyCaption);
        assert!(app.caption_copied);
        let _ = app.update(Message::CopyAcknowledged);
        assert!(!app.caption_copied);
    }
}
