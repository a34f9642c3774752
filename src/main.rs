use gloo::timers::callback::{Interval, Timeout};
use js_sys::Date;
use web_sys::{
    Event, HtmlCanvasElement, HtmlImageElement, HtmlInputElement, InputEvent, KeyboardEvent,
};
use yew::prelude::*;

mod background_image;
mod feedback;
mod theme;
mod wheel_canvas;

use background_image::{
    create_object_url, load_image, revoke_object_url, validate_upload, BackgroundImage, ImageError,
};
use feedback::FeedbackModal;
use kururi_core::{
    color_of, splitmix64, EntryList, SpinPhase, SpinSession, MAX_ENTRIES, MAX_ENTRY_LEN,
    MIN_ENTRIES, SPIN_TICK_MS,
};
use theme::{apply_theme, load_theme, save_theme, Theme};
use wheel_canvas::{draw_wheel, fullscreen_wheel_size, PAGE_WHEEL_SIZE};

const ZOOM_OUT_MS: u32 = 300;

/// Fresh seed per user action; folding in the previous seed keeps two
/// actions in the same millisecond from colliding.
fn next_seed(previous: u64) -> u64 {
    splitmix64(Date::now() as u64 ^ previous.wrapping_add(0x9e3779b97f4a7c15))
}

fn redraw(
    canvas_ref: &NodeRef,
    size: u32,
    entries: &EntryList,
    rotation: f64,
    background: Option<&HtmlImageElement>,
) {
    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
        return;
    };
    if let Err(err) = draw_wheel(&canvas, size, entries.labels(), rotation, background) {
        gloo::console::warn!("wheel: draw failed", err);
    }
}

#[function_component(App)]
fn app() -> Html {
    let entries = use_state(EntryList::new);
    let new_entry = use_state(String::new);
    let error = use_state(|| None::<String>);
    let rotation = use_state(|| 0.0f64);
    let theme = use_state(load_theme);
    let background = use_state(|| None::<BackgroundImage>);
    let winner = use_state(|| None::<(usize, String)>);
    let show_winner = use_state(|| false);
    let overlay_active = use_state(|| false);
    let zooming_out = use_state(|| false);
    let overlay_size = use_state(|| PAGE_WHEEL_SIZE);
    let show_feedback = use_state(|| false);
    let session = use_mut_ref(|| None::<SpinSession>);
    let tick_handle = use_mut_ref(|| None::<Interval>);
    let seed_nonce = use_mut_ref(|| 0u64);
    let canvas_ref = use_node_ref();
    let file_input_ref = use_node_ref();

    let busy = *overlay_active;

    use_effect_with(*theme, move |theme_value| {
        apply_theme(*theme_value);
        || ()
    });

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (
                (*entries).clone(),
                *rotation,
                (*background).clone(),
                *overlay_active,
                *overlay_size,
            ),
            move |(entries_value, rotation_value, background_value, overlay_value, size_value)| {
                let image = background_value.as_ref().map(|bg| &bg.element);
                let size = if *overlay_value {
                    *size_value
                } else {
                    PAGE_WHEEL_SIZE
                };
                redraw(&canvas_ref, size, entries_value, *rotation_value, image);
                || ()
            },
        );
    }

    let on_spin = {
        let entries = entries.clone();
        let rotation = rotation.clone();
        let error = error.clone();
        let winner = winner.clone();
        let show_winner = show_winner.clone();
        let overlay_active = overlay_active.clone();
        let overlay_size = overlay_size.clone();
        let zooming_out = zooming_out.clone();
        let session = session.clone();
        let tick_handle = tick_handle.clone();
        let seed_nonce = seed_nonce.clone();
        Callback::from(move |_: MouseEvent| {
            if session.borrow().is_some() || *zooming_out || entries.is_empty() {
                return;
            }
            let seed = next_seed(*seed_nonce.borrow());
            *seed_nonce.borrow_mut() = seed;
            let started = SpinSession::begin(entries.len(), *rotation, Date::now(), seed);
            gloo::console::log!(
                "spin: started",
                started.winning_index as u32,
                started.duration_ms
            );
            *session.borrow_mut() = Some(started);
            error.set(None);
            winner.set(None);
            show_winner.set(false);
            overlay_size.set(fullscreen_wheel_size());
            overlay_active.set(true);

            let rotation = rotation.clone();
            let entries = entries.clone();
            let winner = winner.clone();
            let show_winner = show_winner.clone();
            let session_for_tick = session.clone();
            let handle_for_tick = tick_handle.clone();
            let interval = Interval::new(SPIN_TICK_MS, move || {
                let now = Date::now();
                let Some(active) = session_for_tick.borrow().clone() else {
                    handle_for_tick.borrow_mut().take();
                    return;
                };
                rotation.set(active.rotation_at(now));
                if active.phase_at(now) == SpinPhase::WinnerShown {
                    let label = entries.get(active.winning_index).map(str::to_string);
                    winner.set(label.map(|text| (active.winning_index, text)));
                    show_winner.set(true);
                    handle_for_tick.borrow_mut().take();
                }
            });
            *tick_handle.borrow_mut() = Some(interval);
        })
    };

    // Shared exit for both winner actions: hide the card, zoom the overlay
    // out, then reset rotation once it is off screen.
    let finish_session = {
        let show_winner = show_winner.clone();
        let zooming_out = zooming_out.clone();
        let overlay_active = overlay_active.clone();
        let rotation = rotation.clone();
        let winner = winner.clone();
        let session = session.clone();
        Callback::from(move |_: ()| {
            show_winner.set(false);
            zooming_out.set(true);
            *session.borrow_mut() = None;
            let overlay_active = overlay_active.clone();
            let zooming_out = zooming_out.clone();
            let rotation = rotation.clone();
            let winner = winner.clone();
            Timeout::new(ZOOM_OUT_MS, move || {
                overlay_active.set(false);
                zooming_out.set(false);
                rotation.set(0.0);
                winner.set(None);
            })
            .forget();
        })
    };

    let on_spin_again = {
        let finish_session = finish_session.clone();
        Callback::from(move |_: MouseEvent| finish_session.emit(()))
    };

    let on_remove_winner = {
        let entries = entries.clone();
        let winner = winner.clone();
        let finish_session = finish_session.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some((index, _)) = (*winner).clone() {
                let mut next = (*entries).clone();
                if next.remove(index).is_ok() {
                    entries.set(next);
                }
            }
            finish_session.emit(());
        })
    };

    let add_entry = {
        let entries = entries.clone();
        let new_entry = new_entry.clone();
        let error = error.clone();
        let rotation = rotation.clone();
        Callback::from(move |_: ()| {
            let mut next = (*entries).clone();
            match next.add(&new_entry) {
                Ok(()) => {
                    entries.set(next);
                    new_entry.set(String::new());
                    error.set(None);
                    rotation.set(0.0);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };
    let on_add_click = {
        let add_entry = add_entry.clone();
        Callback::from(move |_: MouseEvent| add_entry.emit(()))
    };
    let on_add_keydown = {
        let add_entry = add_entry.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                add_entry.emit(());
            }
        })
    };
    let on_new_entry_input = {
        let new_entry = new_entry.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            new_entry.set(input.value());
            error.set(None);
        })
    };

    let on_shuffle = {
        let entries = entries.clone();
        let error = error.clone();
        let rotation = rotation.clone();
        let seed_nonce = seed_nonce.clone();
        Callback::from(move |_: MouseEvent| {
            let seed = next_seed(*seed_nonce.borrow());
            *seed_nonce.borrow_mut() = seed;
            let mut next = (*entries).clone();
            next.shuffle(seed);
            entries.set(next);
            error.set(None);
            rotation.set(0.0);
        })
    };

    let on_clear = {
        let entries = entries.clone();
        let error = error.clone();
        let rotation = rotation.clone();
        let winner = winner.clone();
        let show_winner = show_winner.clone();
        let overlay_active = overlay_active.clone();
        let session = session.clone();
        let tick_handle = tick_handle.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*entries).clone();
            next.clear();
            entries.set(next);
            error.set(None);
            rotation.set(0.0);
            winner.set(None);
            show_winner.set(false);
            overlay_active.set(false);
            *session.borrow_mut() = None;
            tick_handle.borrow_mut().take();
        })
    };

    let on_image_button = {
        let background = background.clone();
        let error = error.clone();
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(current) = (*background).clone() {
                current.revoke();
                background.set(None);
                error.set(None);
                if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            } else if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let background = background.clone();
        let error = error.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if let Err(rejection) = validate_upload(file.size(), &file.type_()) {
                gloo::console::warn!("image: rejected", rejection.to_string());
                error.set(Some(rejection.to_string()));
                return;
            }
            let url = match create_object_url(&file) {
                Ok(url) => url,
                Err(js_err) => {
                    gloo::console::warn!("image: object url failed", js_err);
                    error.set(Some(ImageError::DecodeFailed.to_string()));
                    return;
                }
            };
            let on_ready = {
                let background = background.clone();
                let error = error.clone();
                let url = url.clone();
                Callback::from(move |element: HtmlImageElement| {
                    if let Some(previous) = (*background).clone() {
                        previous.revoke();
                    }
                    background.set(Some(BackgroundImage {
                        url: url.clone(),
                        element,
                    }));
                    error.set(None);
                })
            };
            let on_failed = {
                let error = error.clone();
                let url = url.clone();
                Callback::from(move |_: ()| {
                    revoke_object_url(&url);
                    error.set(Some(ImageError::DecodeFailed.to_string()));
                })
            };
            if let Err(js_err) = load_image(&url, on_ready, on_failed) {
                gloo::console::warn!("image: load failed", js_err);
                revoke_object_url(&url);
                error.set(Some(ImageError::DecodeFailed.to_string()));
            }
        })
    };

    let on_theme_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            theme.set(next);
            save_theme(next);
        })
    };

    let on_feedback_open = {
        let show_feedback = show_feedback.clone();
        Callback::from(move |_: MouseEvent| show_feedback.set(true))
    };
    let on_feedback_close = {
        let show_feedback = show_feedback.clone();
        Callback::from(move |_: ()| show_feedback.set(false))
    };

    let theme_icon = match *theme {
        Theme::Light => "\u{2600}\u{fe0f}",
        Theme::Dark => "\u{1f319}",
    };

    let has_background = background.is_some();
    let image_button_class = if has_background {
        "action-button action-danger"
    } else {
        "action-button"
    };
    let image_aria = if has_background {
        "Remove background image"
    } else {
        "Upload background image"
    };

    let add_disabled = busy || new_entry.trim().is_empty() || entries.len() >= MAX_ENTRIES;

    let wheel_canvas = html! {
        <canvas
            ref={canvas_ref.clone()}
            class="wheel-canvas"
            aria-label="Decision wheel"
            onclick={on_spin.clone()}
        />
    };
    let page_wheel = if *overlay_active {
        html! {}
    } else {
        wheel_canvas.clone()
    };

    let error_banner = match error.as_ref() {
        Some(text) => html! { <p class="error-banner">{ text.clone() }</p> },
        None => html! {},
    };

    let rows = entries
        .labels()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let on_row_input = {
                let entries = entries.clone();
                let error = error.clone();
                Callback::from(move |event: InputEvent| {
                    let input: HtmlInputElement = event.target_unchecked_into();
                    let value = input.value();
                    error.set(None);
                    if value.trim().is_empty() {
                        return;
                    }
                    let mut next = (*entries).clone();
                    if next.update(index, &value).is_ok() {
                        entries.set(next);
                    }
                })
            };
            let on_row_remove = {
                let entries = entries.clone();
                let error = error.clone();
                let rotation = rotation.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*entries).clone();
                    if next.remove(index).is_ok() {
                        entries.set(next);
                        error.set(None);
                        rotation.set(0.0);
                    }
                })
            };
            html! {
                <li class="entry-row" key={index.to_string()}>
                    <span
                        class="entry-dot"
                        style={format!("background-color: {}", color_of(index))}
                        aria-label={format!("Color indicator for entry {}", index + 1)}
                    />
                    <input
                        class="entry-field"
                        type="text"
                        maxlength={MAX_ENTRY_LEN.to_string()}
                        autocomplete="off"
                        spellcheck="false"
                        aria-label={format!("Edit entry {}", index + 1)}
                        value={label.clone()}
                        oninput={on_row_input}
                        disabled={busy}
                    />
                    <button
                        class="entry-remove"
                        type="button"
                        aria-label={format!("Remove entry {}", index + 1)}
                        onclick={on_row_remove}
                        disabled={busy || entries.len() <= MIN_ENTRIES}
                    >
                        { "\u{00d7}" }
                    </button>
                </li>
            }
        })
        .collect::<Html>();

    let winner_card = match (*winner).clone() {
        Some((_, label)) if *show_winner => {
            let remove_button = if entries.len() > MIN_ENTRIES {
                html! {
                    <button
                        class="winner-remove"
                        type="button"
                        onclick={on_remove_winner.clone()}
                    >
                        { "Remove winner" }
                    </button>
                }
            } else {
                html! {}
            };
            let sparkles = (0..16)
                .map(|step| {
                    let style = format!(
                        "left: {}%; top: {}%; animation-delay: {}ms;",
                        10 + step * 5,
                        10 + (step % 5) * 18,
                        step * 100
                    );
                    html! { <span class="sparkle" style={style} key={step.to_string()} /> }
                })
                .collect::<Html>();
            html! {
                <div class="winner-overlay">
                    <div class="winner-backdrop" />
                    <div class="winner-card">
                        <div class="winner-sparkles" aria-hidden="true">{ sparkles }</div>
                        <span class="winner-trophy" aria-hidden="true">{ "\u{1f3c6}" }</span>
                        <h2>{ "\u{1f389} Winner! \u{1f389}" }</h2>
                        <p class="winner-label">{ label }</p>
                        <button
                            class="winner-again"
                            type="button"
                            onclick={on_spin_again.clone()}
                        >
                            { "Spin Again" }
                        </button>
                        { remove_button }
                    </div>
                </div>
            }
        }
        _ => html! {},
    };

    let overlay = if *overlay_active {
        let overlay_class = if *zooming_out {
            "spin-overlay zoom-out"
        } else {
            "spin-overlay"
        };
        html! {
            <div class={overlay_class}>
                <div class="spin-stage">
                    { wheel_canvas.clone() }
                    { winner_card }
                </div>
            </div>
        }
    } else {
        html! {}
    };

    let feedback_modal = if *show_feedback {
        html! { <FeedbackModal on_close={on_feedback_close} /> }
    } else {
        html! {}
    };

    html! {
        <>
            <button
                class="theme-toggle"
                type="button"
                aria-label="Toggle theme"
                onclick={on_theme_toggle}
            >
                { theme_icon }
            </button>
            <main class="page">
                <header class="page-header">
                    <h1>{ "Spin!" }</h1>
                </header>
                <section class="wheel-panel">
                    { page_wheel }
                </section>
                <section class="controls-grid">
                    <button
                        class="action-button"
                        type="button"
                        aria-label="Shuffle entries"
                        onclick={on_shuffle}
                        disabled={busy}
                    >
                        { "Shuffle" }
                    </button>
                    <button
                        class={image_button_class}
                        type="button"
                        aria-label={image_aria}
                        onclick={on_image_button}
                        disabled={busy}
                    >
                        { "Image" }
                    </button>
                    <button
                        class="action-button action-danger"
                        type="button"
                        aria-label="Clear all entries"
                        onclick={on_clear}
                        disabled={busy}
                    >
                        { "Clear" }
                    </button>
                </section>
                <input
                    ref={file_input_ref.clone()}
                    class="file-input"
                    type="file"
                    accept="image/*"
                    aria-label="Upload background image"
                    onchange={on_file_change}
                />
                <section class="add-entry">
                    <input
                        class="add-entry-field"
                        type="text"
                        placeholder="Add new entry..."
                        maxlength={MAX_ENTRY_LEN.to_string()}
                        autocomplete="off"
                        spellcheck="false"
                        aria-label="Add new entry"
                        value={(*new_entry).clone()}
                        oninput={on_new_entry_input}
                        onkeydown={on_add_keydown}
                        disabled={busy}
                    />
                    <button
                        class="add-entry-button"
                        type="button"
                        aria-label="Add entry"
                        onclick={on_add_click}
                        disabled={add_disabled}
                    >
                        { "+" }
                    </button>
                </section>
                { error_banner }
                <ul class="entry-list">
                    { rows }
                </ul>
                <footer class="page-footer">
                    <p class="hint">{ "Tap anywhere on the wheel to spin" }</p>
                    <p class="entry-counter">
                        { format!("{} of {} entries", entries.len(), MAX_ENTRIES) }
                    </p>
                </footer>
            </main>
            { overlay }
            <button
                class="feedback-fab"
                type="button"
                aria-label="Get Help or Send Feedback"
                onclick={on_feedback_open}
            >
                { "?" }
            </button>
            { feedback_modal }
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
