// src/main.rs
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod leaderboard;
mod results;

use leaderboard::{Leaderboard, TeamColor};
use results::{fetch_results, LoadError, ResultsDocument};

/// Served beside the page; the deploy step copies the server's score dump here.
const RESULTS_URL: &str = "./result.json";
/// Where the sign-up form sends new players.
const GAME_URL: &str = "https://power-baby.com/game.html";
/// Swap in the reveal-stream id before deploy.
const TRAILER_EMBED_ID: &str = "aqz-KE-bpKQ";

const LS_NAME: &str = "pbl_signup_name";
const LS_COLOR: &str = "pbl_signup_color";

const THANKS_NOTE: &str = "Thanks for joining the game! If it does not load \
you may be on an unsupported mobile device; retry in a PC or Mac browser. \
Pro tip: on mobile, double-tap the game window to zoom for better angle \
control. Good luck!";

/// Page lifecycle. Ready and Failed are terminal; a full reload is the only
/// way back to Loading.
#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Loading,
    Ready(ResultsDocument),
    Failed(LoadError),
}

// ---------- browser glue ----------

fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_saved_name() -> String {
    let Some(ls) = get_local_storage() else {
        return String::new();
    };
    ls.get_item(LS_NAME).ok().flatten().unwrap_or_default()
}

fn load_saved_color() -> TeamColor {
    let Some(ls) = get_local_storage() else {
        return TeamColor::Blue;
    };
    match ls.get_item(LS_COLOR) {
        Ok(Some(v)) => TeamColor::parse(&v),
        _ => TeamColor::Blue,
    }
}

fn save_signup(name: &str, color: TeamColor) {
    if let Some(ls) = get_local_storage() {
        let _ = ls.set_item(LS_NAME, name);
        let _ = ls.set_item(LS_COLOR, color.as_str());
    }
}

fn encode_uri(s: &str) -> String {
    js_sys::encode_uri_component(s).as_string().unwrap_or_default()
}

fn open_game_tab(name: &str, color: TeamColor) -> Result<(), String> {
    let url = format!(
        "{}?name={}&color={}",
        GAME_URL,
        encode_uri(name),
        color.as_str()
    );
    let win = web_sys::window().ok_or("no window")?;
    let opened = win
        .open_with_url_and_target(&url, "_blank")
        .map_err(|_| "could not open the game tab".to_string())?;
    if opened.is_none() {
        return Err("the browser blocked the game tab (popup blocker?)".into());
    }
    Ok(())
}

// ---------- components ----------

#[function_component(App)]
fn app() -> Html {
    let phase = use_state(|| Phase::Loading);

    // Load result.json once per page view (relative so it works wherever the
    // page is hosted). No retry: Ready and Failed stick until a reload.
    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_results(RESULTS_URL).await {
                    Ok(doc) => {
                        web_sys::console::log_1(
                            &format!(
                                "result.json: {} pink / {} blue players",
                                doc.personal_pink.len(),
                                doc.personal_blue.len()
                            )
                            .into(),
                        );
                        phase.set(Phase::Ready(doc));
                    }
                    Err(e) => {
                        web_sys::console::error_1(&e.to_string().into());
                        phase.set(Phase::Failed(e));
                    }
                }
            });
            || ()
        });
    }

    let boards = match &*phase {
        Phase::Loading => html! { <div class="small">{ "Loading scores…" }</div> },
        Phase::Ready(doc) => html! {
            <Leaderboard pink={doc.personal_pink.clone()} blue={doc.personal_blue.clone()} />
        },
        Phase::Failed(e) => html! {
            <div class="err">
                <span class="code">{ format!("ERROR: {e}") }</span>
                <div class="small">{ "Reload the page to try again." }</div>
            </div>
        },
    };

    html! {
        <div class="wrap">
          <div class="header">
            <div class="brand">
              <div class="h1">{ "Power, Baby! — Team Scoreboard" }</div>
              <div class="sub">
                { "Every goal in the game counts one vote. Pink or blue, the board below settles it." }
              </div>
            </div>
          </div>

          <div class="card">
            { boards }
          </div>

          <div class="grid">
            <SignupForm />
            <div class="panel">
              <div class="label"><span>{ "Watch the reveal" }</span></div>
              <VideoEmbed embed_id={TRAILER_EMBED_ID} />
            </div>
          </div>

          <div class="footer">
            { "Scores refresh when the page reloads; the game server rewrites " }
            <span class="code">{ "result.json" }</span>
            { " about twice a minute." }
          </div>
        </div>
    }
}

#[function_component(SignupForm)]
fn signup_form() -> Html {
    let name = use_state(load_saved_name);
    let color = use_state(load_saved_color);
    let status = use_state(|| None::<String>);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_color_change = {
        let color = color.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() else {
                return;
            };
            color.set(TeamColor::parse(&sel.value()));
        })
    };

    let on_submit = {
        let name = name.clone();
        let color = color.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let picked = (*name).trim().to_string();
            if picked.is_empty() {
                status.set(Some("Please fill out all required fields".into()));
                return;
            }
            save_signup(&picked, *color);
            match open_game_tab(&picked, *color) {
                Ok(()) => status.set(Some(THANKS_NOTE.into())),
                Err(e) => status.set(Some(e)),
            }
        })
    };

    html! {
        <form class="panel" onsubmit={on_submit}>
            <div class="label"><span>{ "Gender Vote Game" }</span></div>
            <div class="field">
                <label for="name">{ "Name:" }</label>
                <input
                    id="name"
                    type="text"
                    required=true
                    value={(*name).clone()}
                    oninput={on_name_input}
                />
            </div>
            <div class="field">
                <label for="color">{ "Color:" }</label>
                <select id="color" onchange={on_color_change} value={(*color).as_str()}>
                    <option value="blue">{ "Blue" }</option>
                    <option value="pink">{ "Pink" }</option>
                </select>
            </div>
            <button type="submit">{ "Submit" }</button>
            if let Some(s) = (*status).clone() {
                <div class="small status">{ s }</div>
            }
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct VideoEmbedProps {
    embed_id: AttrValue,
}

#[function_component(VideoEmbed)]
fn video_embed(props: &VideoEmbedProps) -> Html {
    html! {
        <div class="video-responsive">
            <iframe
                src={format!("https://www.youtube.com/embed/{}", props.embed_id)}
                frameborder="0"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen=true
                title="Embedded youtube"
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
