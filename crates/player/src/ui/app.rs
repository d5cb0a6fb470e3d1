//! Root component: story panel, choice buttons, save/load controls.

use std::sync::Arc;

use dioxus::prelude::*;

use rpgpt_shared::routes::SAVE_FILE_NAME;

use crate::application::{filter_content, save_file, SaveFile, StoryService};
use crate::infrastructure::platform;
use crate::ui::services::Services;
use crate::ui::state::{use_typewriter_effect, Controls, StoryViewState};

/// Stylesheet injected into the desktop window head.
pub const STYLES: &str = r#"
body { margin: 0; background: #000; color: #fff; font-family: sans-serif; }
.app { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 1rem; box-sizing: border-box; }
.title { font-size: 1.875rem; font-weight: bold; margin-bottom: 1.5rem; }
.story-panel { width: 100%; max-width: 32rem; background: #1e293b; padding: 1.5rem; border-radius: 0.5rem; margin-bottom: 1.5rem; white-space: pre-wrap; cursor: default; }
.status { color: #94a3b8; font-style: italic; margin-bottom: 1rem; }
.choices, .save-controls { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
.save-controls { margin-top: 2rem; gap: 0.5rem; }
button { background: #475569; color: #fff; font-weight: bold; padding: 0.5rem 1rem; border: none; border-radius: 0.25rem; cursor: pointer; transition: background 0.3s; }
button:hover:enabled { background: #64748b; }
button:disabled { opacity: 0.5; cursor: not-allowed; }
.save-controls button { background: #334155; font-weight: normal; font-size: 0.875rem; }
"#;

pub fn app() -> Element {
    let services = use_context::<Services>();
    let mut view = use_hook(StoryViewState::new);
    use_typewriter_effect(view);

    // Fetch the engine's state once on mount
    let story = services.story.clone();
    use_future(move || {
        let story = story.clone();
        async move {
            match story.get_state().await {
                Ok(state) => view.show(state.content, state.choices),
                Err(e) => tracing::error!(error = %e, "Error fetching game state"),
            }
        }
    });

    let story = services.story.clone();
    let on_choice = use_callback(move |choice: String| {
        let story = story.clone();
        spawn(async move {
            view.is_busy.set(true);
            match story.submit_choice(&choice).await {
                Ok(state) => view.reveal(state.content, state.choices),
                Err(e) => tracing::error!(error = %e, choice = %choice, "Error submitting choice"),
            }
            view.is_busy.set(false);
        });
    });

    let story_for_export = services.story.clone();
    let story_for_import = services.story.clone();

    let shown = filter_content(&view.displayed_text.read()).to_string();
    let choices = view.choices.read().clone();
    let busy = *view.is_busy.read();
    let controls = Controls::for_busy(busy);

    rsx! {
        div { class: "app",
            h1 { class: "title", "RPGPT - An RPG inside ChatGPT!" }
            div {
                class: "story-panel",
                title: "Click to show the full text",
                onclick: move |_| {
                    if *view.is_typing.peek() {
                        view.skip_reveal();
                    }
                },
                p { "{shown}" }
            }
            if busy {
                div { class: "status", "The story continues..." }
            }
            div { class: "choices",
                for (index, choice) in choices.into_iter().enumerate() {
                    ChoiceButton {
                        key: "{index}",
                        choice,
                        disabled: !controls.choose,
                        on_choose: on_choice,
                    }
                }
            }
            div { class: "save-controls",
                button {
                    onclick: move |_| {
                        spawn(save_locally(view));
                    },
                    "Save"
                }
                button {
                    disabled: !controls.load,
                    onclick: move |_| {
                        spawn(load_locally(view));
                    },
                    "Load"
                }
                button {
                    onclick: move |_| {
                        spawn(export_from_engine(story_for_export.clone()));
                    },
                    "Save on server"
                }
                button {
                    disabled: !controls.load,
                    onclick: move |_| {
                        spawn(import_into_engine(story_for_import.clone(), view));
                    },
                    "Load from server"
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(choice: String, disabled: bool, on_choose: EventHandler<String>) -> Element {
    let label = choice.clone();
    rsx! {
        button {
            class: "choice",
            disabled,
            onclick: move |_| on_choose.call(choice.clone()),
            "{label}"
        }
    }
}

/// Write `{content, choices}` to a file the player picks.
async fn save_locally(view: StoryViewState) {
    let save = SaveFile::new(view.content.peek().clone(), view.choices.peek().clone());
    let Some(path) = platform::pick_save_path(SAVE_FILE_NAME).await else {
        return;
    };
    match save.write_to(&path) {
        Ok(()) => tracing::info!(path = %path.display(), "Saved game locally"),
        Err(e) => tracing::error!(error = %e, path = %path.display(), "Error saving game"),
    }
}

/// Replace the view with a local save. Unreadable files are logged and ignored.
async fn load_locally(mut view: StoryViewState) {
    let Some(path) = platform::pick_open_path().await else {
        return;
    };
    // A choice may have been submitted while the dialog was open
    if !Controls::for_busy(*view.is_busy.peek()).load {
        tracing::warn!("Load skipped while a choice is pending");
        return;
    }
    match SaveFile::read_from(&path) {
        Ok(save) => view.show(save.content, save.choices),
        Err(e) => tracing::error!(error = %e, path = %path.display(), "Error loading game"),
    }
}

/// Download the engine's full state, history included, to a file.
async fn export_from_engine(story: Arc<StoryService>) {
    let state = match story.export_state().await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Error exporting game state");
            return;
        }
    };
    let Some(path) = platform::pick_save_path(SAVE_FILE_NAME).await else {
        return;
    };
    match save_file::write_game_state(&path, &state) {
        Ok(()) => tracing::info!(path = %path.display(), "Saved engine state"),
        Err(e) => tracing::error!(error = %e, path = %path.display(), "Error saving engine state"),
    }
}

/// Send a save file to the engine and show the state it accepted.
async fn import_into_engine(story: Arc<StoryService>, mut view: StoryViewState) {
    let Some(path) = platform::pick_open_path().await else {
        return;
    };
    // A choice may have been submitted while the dialog was open
    if !Controls::for_busy(*view.is_busy.peek()).load {
        tracing::warn!("Load skipped while a choice is pending");
        return;
    }
    let value = match save_file::read_json(&path) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "Error reading save file");
            return;
        }
    };
    match story.import_state(value).await {
        Ok(state) => view.show(state.content, state.choices),
        Err(e) => tracing::error!(error = %e, "Engine rejected game state"),
    }
}
