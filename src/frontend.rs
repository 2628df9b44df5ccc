use crate::config::PageConfig;
use crate::contact::{
    ButtonState, ContactEndpoint, ContactForm, ContactPayload, ContactSubmitter, ContactTransport,
    SubmitFeedback, TransportError,
};
use crate::nav::{
    active_section, anchor_target, card_hover_transform, link_is_active, parallax_offset,
    scroll_indicator_visible, scroll_target, MenuState, NavbarStyle, SectionOffset,
};
use crate::notify::{
    Notification, NotificationId, Notifications, Severity, AUTO_DISMISS_AFTER, SLIDE_IN_DELAY,
    SLIDE_OUT_DURATION,
};
use crate::particles::{self, ParticleSpec};
use crate::rain::{CanvasGeometry, CodeRain, RainSurface};
use crate::random::MathRandom;
use crate::reveal::{
    ObserverSpec, RevealSet, SkillBarTrigger, REVEALED_CLASS, REVEAL_OBSERVER, REVEAL_SELECTOR,
    SKILL_BAR_OBSERVER, SKILL_BAR_SELECTOR,
};
use crate::schedule::{set_timeout, AnimationFrames, FrameLoop};
use crate::telemetry::{log_event, set_threshold, LogLevel};
use crate::typing::{TypingEngine, TypingTimings};
use gloo_net::http::Request;
use js_sys::Array;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, CanvasRenderingContext2d, Document, Element, Event, EventTarget, HtmlCanvasElement,
    HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollToOptions,
};
use yew::prelude::*;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];
const REVEAL_KEY_ATTR: &str = "data-reveal-key";
const SKILL_KEY_ATTR: &str = "data-skill-key";

const SKILLS: [(&str, &[(&str, u8)]); 3] = [
    (
        "Languages",
        &[("Python", 92), ("Rust", 78), ("Bash", 85), ("SQL", 70)],
    ),
    (
        "Security",
        &[("Network Scanning", 88), ("Web App Testing", 80), ("Threat Modeling", 72)],
    ),
    (
        "Tooling",
        &[("Linux", 90), ("Docker", 76), ("Git", 88)],
    ),
];

const PROJECTS: [(&str, &str, &[&str]); 3] = [
    (
        "security_scanner.py",
        "Asynchronous port and banner scanner with pluggable fingerprint rules.",
        &["Python", "asyncio", "nmap"],
    ),
    (
        "log-sentry",
        "Streams auth logs, flags brute-force bursts and ships alerts to chat.",
        &["Rust", "tokio", "regex"],
    ),
    (
        "ctf-notes",
        "Write-ups and helper scripts from capture-the-flag competitions.",
        &["Python", "pwntools", "Ghidra"],
    ),
];

const STATS: [(&str, &str); 3] = [("25+", "Projects shipped"), ("40+", "CTF challenges"), ("5", "Years coding")];

fn document() -> Option<Document> {
    window()?.document()
}

fn current_scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn page_origin() -> Option<String> {
    window()?.location().origin().ok()
}

/// DOM listener that detaches itself when dropped.
struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    fn new(target: EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target,
            event,
            callback,
        })
    }

    fn on_window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        Self::new(window()?.into(), event, handler)
    }

    fn on_document(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        Self::new(document()?.into(), event, handler)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[hook]
fn use_scroll_y() -> f64 {
    let scroll_y = use_state_eq(current_scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::on_window("scroll", move |_| scroll_y.set(current_scroll_y()));
            move || drop(listener)
        });
    }

    *scroll_y
}

fn section_offsets() -> Vec<SectionOffset> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all("section[id]").ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionOffset::new(section.id(), f64::from(section.offset_top())))
        .collect()
}

fn scroll_to_section(id: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let Some(target) = win
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(target.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
    true
}

/// Smooth-scrolls in-page links; other links keep their default navigation.
fn follow_anchor(event: &MouseEvent) {
    let Some(href) = event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.get_attribute("href"))
    else {
        return;
    };
    let Some(id) = anchor_target(&href) else {
        return;
    };

    event.prevent_default();
    if !scroll_to_section(id) {
        log_event(LogLevel::Debug, "anchor_target_missing", json!({ "id": id }));
    }
}

#[derive(Clone)]
struct Toaster {
    state: Rc<RefCell<Notifications>>,
    refresh: UseForceUpdateHandle,
}

impl PartialEq for Toaster {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Toaster {
    fn current(&self) -> Option<Notification> {
        self.state.borrow().current().cloned()
    }

    fn show(&self, message: &str, severity: Severity) {
        let id = self.state.borrow_mut().show(message, severity);
        self.refresh.force_update();

        let reveal = self.clone();
        set_timeout(SLIDE_IN_DELAY, move || {
            if reveal.state.borrow_mut().reveal(id) {
                reveal.refresh.force_update();
            }
        });

        let expire = self.clone();
        set_timeout(AUTO_DISMISS_AFTER, move || expire.dismiss(id));
    }

    fn dismiss(&self, id: NotificationId) {
        if !self.state.borrow_mut().dismiss(id) {
            return;
        }
        self.refresh.force_update();

        let remove = self.clone();
        set_timeout(SLIDE_OUT_DURATION, move || {
            if remove.state.borrow_mut().remove(id) {
                remove.refresh.force_update();
            }
        });
    }
}

#[derive(Properties, PartialEq)]
struct NotificationToastProps {
    notification: Option<Notification>,
    on_close: Callback<NotificationId>,
}

#[function_component(NotificationToast)]
fn notification_toast(props: &NotificationToastProps) -> Html {
    let Some(notification) = props.notification.clone() else {
        return html! {};
    };

    let severity = notification.severity;
    let offset = if notification.on_screen() { "0" } else { "100%" };
    let style = format!(
        "position: fixed; top: 100px; right: 20px; background: {}; color: #000; padding: 15px 20px; \
         border-radius: 10px; box-shadow: 0 10px 30px rgba(0,0,0,0.3); z-index: 10000; display: flex; \
         align-items: center; gap: 15px; max-width: 400px; transform: translateX({offset}); \
         transition: transform 0.3s ease; font-family: 'Rajdhani', sans-serif; font-weight: 600;",
        severity.color()
    );

    let onclick = {
        let on_close = props.on_close.clone();
        let id = notification.id;
        Callback::from(move |_| on_close.emit(id))
    };

    html! {
        <div key={notification.id.get()} class={classes!("notification", format!("notification-{}", severity.as_str()))} style={style} role="status">
            <div class="notification-content">
                <i class={classes!("fas", severity.icon())}></i>
                <span>{notification.message}</span>
            </div>
            <button class="notification-close" type="button" aria-label="Dismiss" onclick={onclick}>
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}

#[function_component(Navbar)]
fn navbar() -> Html {
    let scroll_y = use_scroll_y();
    let menu = use_state(MenuState::default);

    let sections = section_offsets();
    let active = active_section(&sections, scroll_y);

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_| menu.set((*menu).toggled()))
    };

    let on_link = {
        let menu = menu.clone();
        Callback::from(move |event: MouseEvent| {
            menu.set((*menu).closed());
            follow_anchor(&event);
        })
    };

    html! {
        <nav class="navbar" style={NavbarStyle::for_scroll(scroll_y).css()}>
            <div class="nav-container">
                <a class="nav-logo" href="#home" onclick={Callback::from(|event: MouseEvent| follow_anchor(&event))}>
                    {"<jr/>"}
                </a>
                <ul class={classes!("nav-menu", menu.is_open().then_some("active"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li class="nav-item">
                            <a
                                href={*href}
                                class={classes!("nav-link", link_is_active(href, active).then_some("active"))}
                                onclick={on_link.clone()}
                            >
                                {*label}
                            </a>
                        </li>
                    }) }
                </ul>
                <div
                    class={classes!("hamburger", menu.is_open().then_some("active"))}
                    onclick={on_toggle}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct TypingLineProps {
    commands: Vec<String>,
    timings: TypingTimings,
}

fn schedule_typing(
    mut engine: TypingEngine,
    text: UseStateHandle<String>,
    alive: Rc<Cell<bool>>,
    delay: Duration,
) {
    set_timeout(delay, move || {
        if !alive.get() {
            return;
        }
        let frame = engine.tick();
        text.set(frame.text);
        schedule_typing(engine, text, alive, frame.delay);
    });
}

#[function_component(TypingLine)]
fn typing_line(props: &TypingLineProps) -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with(
            (props.commands.clone(), props.timings),
            move |(commands, timings)| {
                let alive = Rc::new(Cell::new(true));
                match TypingEngine::new(commands.iter().cloned(), *timings) {
                    Some(engine) => schedule_typing(engine, text, alive.clone(), timings.start),
                    None => log_event(LogLevel::Debug, "typing_skipped", json!({ "reason": "no commands" })),
                }
                move || alive.set(false)
            },
        );
    }

    html! {
        <span class="typing">{(*text).clone()}</span>
    }
}

struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl RainSurface for CanvasSurface {
    fn configure(&mut self, geometry: &CanvasGeometry, font: &str) {
        self.canvas.set_width(geometry.pixel_width);
        self.canvas.set_height(geometry.pixel_height);

        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", geometry.css_width));
        let _ = style.set_property("height", &format!("{}px", geometry.css_height));

        let ratio = geometry.device_pixel_ratio;
        let _ = self.context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
        self.context.set_font(font);
    }

    fn fade(&mut self, color: &str, width: f64, height: f64) {
        self.context.set_fill_style_str(color);
        self.context.fill_rect(0.0, 0.0, width, height);
    }

    fn set_glyph_style(&mut self, color: &str, shadow_color: &str, shadow_blur: f64) {
        self.context.set_fill_style_str(color);
        self.context.set_shadow_color(shadow_color);
        self.context.set_shadow_blur(shadow_blur);
    }

    fn draw_glyph(&mut self, glyph: char, x: f64, y: f64) {
        let mut buffer = [0u8; 4];
        let _ = self.context.fill_text(glyph.encode_utf8(&mut buffer), x, y);
    }
}

struct RainState {
    rain: CodeRain,
    surface: CanvasSurface,
    frames: FrameLoop<AnimationFrames>,
    host: HtmlElement,
}

impl RainState {
    fn resize(&mut self) {
        let rect = self.host.get_bounding_client_rect();
        let ratio = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        self.rain
            .resize(&mut self.surface, &mut MathRandom, rect.width(), rect.height(), ratio);
    }

    fn paint(&mut self) {
        self.rain.frame(&mut self.surface, &mut MathRandom);
    }

    fn on_frame(&mut self) {
        if self.frames.on_frame() {
            self.paint();
        }
    }
}

/// Code rain bound to the hero canvas: one frame callback, a resize listener,
/// and a visibility listener that pauses while the page is hidden.
struct RainRuntime {
    state: Rc<RefCell<RainState>>,
    frames: AnimationFrames,
    _resize: EventListener,
    _visibility: EventListener,
}

impl RainRuntime {
    fn mount(host: &NodeRef, canvas: &NodeRef) -> Option<Self> {
        let host = host.cast::<HtmlElement>()?;
        let canvas = canvas.cast::<HtmlCanvasElement>()?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let frames = AnimationFrames::new();
        let state = Rc::new(RefCell::new(RainState {
            rain: CodeRain::new(),
            surface: CanvasSurface { canvas, context },
            frames: FrameLoop::new(frames.clone()),
            host,
        }));

        {
            let state = Rc::downgrade(&state);
            frames.set_callback(Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                if let Some(state) = state.upgrade() {
                    state.borrow_mut().on_frame();
                }
            }));
        }

        let resize = {
            let state = Rc::downgrade(&state);
            EventListener::on_window("resize", move |_| {
                if let Some(state) = state.upgrade() {
                    state.borrow_mut().resize();
                }
            })?
        };

        let visibility = {
            let state = Rc::downgrade(&state);
            EventListener::on_document("visibilitychange", move |_| {
                let Some(state) = state.upgrade() else {
                    return;
                };
                let hidden = document().map(|d| d.hidden()).unwrap_or(false);
                let mut state = state.borrow_mut();
                if hidden {
                    state.frames.pause();
                } else {
                    state.frames.resume();
                }
            })?
        };

        {
            let mut state = state.borrow_mut();
            state.resize();
            state.paint();
            state.frames.start();
        }

        Some(Self {
            state,
            frames,
            _resize: resize,
            _visibility: visibility,
        })
    }

    fn unmount(self) {
        self.state.borrow_mut().frames.pause();
        self.frames.clear_callback();
    }
}

#[hook]
fn use_code_rain(host: NodeRef, canvas: NodeRef) {
    use_effect_with((), move |_| {
        let runtime = RainRuntime::mount(&host, &canvas);
        if runtime.is_none() {
            log_event(LogLevel::Debug, "code_rain_skipped", json!({ "reason": "canvas unavailable" }));
        }
        move || {
            if let Some(runtime) = runtime {
                runtime.unmount();
            }
        }
    });
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    config: Rc<PageConfig>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let hero_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    let scroll_y = use_scroll_y();
    let particles = use_memo(props.config.particle_count, |count| {
        particles::spawn(*count, &mut MathRandom)
    });

    use_code_rain(hero_ref.clone(), canvas_ref.clone());

    let indicator_style = if scroll_indicator_visible(scroll_y) {
        "opacity: 1; pointer-events: auto;"
    } else {
        "opacity: 0; pointer-events: none;"
    };

    let on_indicator = Callback::from(|_| {
        if let Some(about) = document().and_then(|d| d.get_element_by_id("about")) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            about.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    html! {
        <section id="home" class="hero" ref={hero_ref}>
            <canvas id="codeRain" ref={canvas_ref}></canvas>
            <div
                class="hero-background"
                style={format!("transform: translateY({}px);", parallax_offset(scroll_y))}
            ></div>
            { for particles.iter().map(|particle: &ParticleSpec| html! {
                <div class="particle" style={particle.style()}></div>
            }) }
            <div class="hero-content">
                <h1 class="hero-title">{"Jordan Reyes"}</h1>
                <p class="hero-subtitle">{"Python developer & security enthusiast"}</p>
                <div class="terminal-window">
                    <div class="terminal-header">
                        <span class="terminal-dot red"></span>
                        <span class="terminal-dot yellow"></span>
                        <span class="terminal-dot green"></span>
                    </div>
                    <div class="terminal-body">
                        <span class="prompt">{"$ "}</span>
                        <TypingLine commands={props.config.commands.clone()} timings={props.config.typing} />
                        <span class="cursor">{"_"}</span>
                    </div>
                </div>
                <div class="hero-buttons">
                    <a href="#projects" class="btn btn-primary" onclick={Callback::from(|event: MouseEvent| follow_anchor(&event))}>
                        {"View Projects"}
                    </a>
                    <a href="#contact" class="btn btn-secondary" onclick={Callback::from(|event: MouseEvent| follow_anchor(&event))}>
                        {"Get In Touch"}
                    </a>
                </div>
            </div>
            <div class="scroll-indicator" style={indicator_style} onclick={on_indicator}>
                <i class="fas fa-chevron-down"></i>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    title: AttrValue,
    description: AttrValue,
    tags: Vec<AttrValue>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let hovered = use_state_eq(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_| hovered.set(false))
    };

    html! {
        <div
            class="project-card"
            style={format!("transform: {};", card_hover_transform(*hovered))}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <h3>{props.title.clone()}</h3>
            <p>{props.description.clone()}</p>
            <div class="project-tags">
                { for props.tags.iter().map(|tag| html! { <span class="tag">{tag.clone()}</span> }) }
            </div>
        </div>
    }
}

struct GlooTransport;

impl ContactTransport for GlooTransport {
    async fn post_json(&self, url: &str, payload: &ContactPayload) -> Result<(), TransportError> {
        let request = Request::post(url)
            .json(payload)
            .map_err(|error| TransportError::Encode(error.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|error| TransportError::Network(error.to_string()))?;

        if !response.ok() {
            return Err(TransportError::Status(response.status()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|error| TransportError::Body(error.to_string()))?;
        Ok(())
    }
}

struct FormFeedback {
    button: UseStateHandle<ButtonState>,
    current: ButtonState,
    toaster: Toaster,
}

impl SubmitFeedback for FormFeedback {
    fn button(&self) -> ButtonState {
        self.current.clone()
    }

    fn set_button(&mut self, state: ButtonState) {
        self.current = state.clone();
        self.button.set(state);
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        self.toaster.show(message, severity);
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
struct ContactSectionProps {
    toaster: Toaster,
}

#[function_component(ContactSection)]
fn contact_section(props: &ContactSectionProps) -> Html {
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let subject_ref = use_node_ref();
    let message_ref = use_node_ref();
    let button = use_state(ButtonState::default);

    let onsubmit = {
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let subject_ref = subject_ref.clone();
        let message_ref = message_ref.clone();
        let button = button.clone();
        let toaster = props.toaster.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if button.disabled {
                return;
            }

            let Some(endpoint) = page_origin().and_then(|origin| ContactEndpoint::from_origin(&origin)) else {
                log_event(LogLevel::Warn, "contact_endpoint_unavailable", json!({}));
                return;
            };

            let form = ContactForm {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                subject: input_value(&subject_ref),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            };

            let mut feedback = FormFeedback {
                button: button.clone(),
                current: (*button).clone(),
                toaster: toaster.clone(),
            };
            let form_ref = form_ref.clone();

            spawn_local(async move {
                let submitter = ContactSubmitter::new(GlooTransport, endpoint);
                let outcome = submitter.submit(&form, &mut feedback).await;

                if outcome.clears_form() {
                    if let Some(element) = form_ref.cast::<HtmlFormElement>() {
                        element.reset();
                    }
                }
            });
        })
    };

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">{"Get In Touch"}</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        <div class="contact-method">
                            <i class="fas fa-envelope"></i>
                            <span>{"hello@jordanreyes.dev"}</span>
                        </div>
                        <div class="contact-method">
                            <i class="fab fa-github"></i>
                            <a href="https://github.com/" target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                        </div>
                        <div class="contact-method">
                            <i class="fas fa-map-marker-alt"></i>
                            <span>{"Remote"}</span>
                        </div>
                    </div>
                    <div class="contact-form">
                        <form ref={form_ref} onsubmit={onsubmit} novalidate={true}>
                            <input ref={name_ref} type="text" placeholder="Your Name" />
                            <input ref={email_ref} type="email" placeholder="Your Email" />
                            <input ref={subject_ref} type="text" placeholder="Subject" />
                            <textarea ref={message_ref} placeholder="Your Message" rows="5"></textarea>
                            <button type="submit" class="btn btn-primary" disabled={button.disabled}>
                                if button.busy {
                                    <><i class="fas fa-spinner fa-spin"></i>{" "}</>
                                }
                                {button.label.clone()}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Keeps an IntersectionObserver and its JS callback alive together.
struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl Observer {
    fn watch(
        spec: ObserverSpec,
        selector: &str,
        key_attr: &'static str,
        callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    ) -> Option<Self> {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(spec.threshold));
        init.set_root_margin(spec.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;

        let nodes = document()?.query_selector_all(selector).ok()?;
        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let _ = element.set_attribute(key_attr, &index.to_string());
            observer.observe(&element);
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

fn watch_key(element: &Element, key_attr: &str) -> Option<usize> {
    element.get_attribute(key_attr)?.parse().ok()
}

fn intersection_entries(entries: &Array) -> Vec<IntersectionObserverEntry> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .collect()
}

fn observe_reveals() -> Option<Observer> {
    let mut reveals = RevealSet::new();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in intersection_entries(&entries) {
                let target = entry.target();
                let Some(key) = watch_key(&target, REVEAL_KEY_ATTR) else {
                    continue;
                };
                if reveals.on_entry(key, entry.is_intersecting()) {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                }
            }
        },
    );

    Observer::watch(REVEAL_OBSERVER, REVEAL_SELECTOR, REVEAL_KEY_ATTR, callback)
}

fn observe_skill_bars() -> Option<Observer> {
    let mut bars = SkillBarTrigger::new();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in intersection_entries(&entries) {
                let Ok(bar) = entry.target().dyn_into::<HtmlElement>() else {
                    continue;
                };
                let Some(key) = watch_key(&bar, SKILL_KEY_ATTR) else {
                    continue;
                };

                let style = bar.style();
                let width = style.get_property_value("width").unwrap_or_default();
                let Some(plan) = bars.on_entry(key, entry.is_intersecting(), &width) else {
                    continue;
                };

                let _ = style.set_property("width", plan.reset_width);
                let target_width = plan.target_width;
                set_timeout(plan.delay, move || {
                    let _ = style.set_property("width", &target_width);
                });
                observer.unobserve(&bar);
            }
        },
    );

    Observer::watch(SKILL_BAR_OBSERVER, SKILL_BAR_SELECTOR, SKILL_KEY_ATTR, callback)
}

fn mark_loaded() {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.class_list().add_1("loaded");
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<PageConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let notifications = use_mut_ref(Notifications::new);
    let refresh = use_force_update();
    let toaster = Toaster {
        state: notifications,
        refresh,
    };

    use_effect_with((), move |_| {
        let observers = (observe_reveals(), observe_skill_bars());
        if observers.0.is_none() || observers.1.is_none() {
            log_event(
                LogLevel::Debug,
                "scroll_triggers_partial",
                json!({ "reveal": observers.0.is_some(), "skill_bars": observers.1.is_some() }),
            );
        }

        let loaded = if document().is_some_and(|d| d.ready_state() == "complete") {
            mark_loaded();
            None
        } else {
            EventListener::on_window("load", |_| mark_loaded())
        };

        move || drop((observers, loaded))
    });

    let on_close = {
        let toaster = toaster.clone();
        Callback::from(move |id: NotificationId| toaster.dismiss(id))
    };

    html! {
        <>
            <Navbar />
            <main>
                <Hero config={props.config.clone()} />

                <section id="about" class="about">
                    <div class="container">
                        <h2 class="section-title">{"About Me"}</h2>
                        <p>
                            {"I build tooling in Python and Rust, break things in CTFs, and \
                              care about software that fails safely."}
                        </p>
                        <div class="stats">
                            { for STATS.iter().map(|(value, label)| html! {
                                <div class="stat">
                                    <span class="stat-number">{*value}</span>
                                    <span class="stat-label">{*label}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="skills" class="skills">
                    <div class="container">
                        <h2 class="section-title">{"Skills"}</h2>
                        <div class="skills-grid">
                            { for SKILLS.iter().map(|(category, skills)| html! {
                                <div class="skill-category">
                                    <h3>{*category}</h3>
                                    { for skills.iter().map(|(skill, level)| html! {
                                        <div class="skill-item">
                                            <span class="skill-name">{*skill}</span>
                                            <div class="skill-bar">
                                                <div class="skill-progress" style={format!("width: {level}%")}></div>
                                            </div>
                                        </div>
                                    }) }
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="projects" class="projects">
                    <div class="container">
                        <h2 class="section-title">{"Projects"}</h2>
                        <div class="projects-grid">
                            { for PROJECTS.iter().map(|(title, description, tags)| html! {
                                <ProjectCard
                                    title={*title}
                                    description={*description}
                                    tags={tags.iter().map(|tag| AttrValue::from(*tag)).collect::<Vec<_>>()}
                                />
                            }) }
                        </div>
                    </div>
                </section>

                <ContactSection toaster={toaster.clone()} />
            </main>
            <footer class="footer">
                <p>{"© Jordan Reyes. Built with Rust and WebAssembly."}</p>
            </footer>
            <NotificationToast notification={toaster.current()} on_close={on_close} />
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = Rc::new(PageConfig::default());
    set_threshold(config.log_level);

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps { config },
    )
    .render();
}
