use crate::cards::DETAILS_MAX_HEIGHT_PX;
use crate::config::SiteConfig;
use crate::contact::{ContactField, ContactTransport};
use crate::content::{
    Section, AGENCY_NAME, METRICS, NAV_SECTIONS, REVIEWS, SERVICES, SERVICE_OPTIONS, TECH_STACK,
};
use crate::counter::format_grouped;
use crate::logging::{self, log_event, LogLevel};
use crate::notify::Notification;
use crate::page::{Effect, Key, PageEvent, PageSession};
use crate::reveal::{reveal_key, ObserverOptions, RevealGroup, METRICS_TRIGGER, REVEAL_KEY_ATTR};
use crate::tooltip::{LabelSize, Pointer};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use js_sys::Array;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Element, Event, HtmlElement, HtmlImageElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions, SubmitEvent,
};
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

const NOTIFICATION_STACK_TOP: f64 = 20.0;
const NOTIFICATION_STACK_STEP: f64 = 72.0;
const NOTIFICATION_OFFSCREEN_X: f64 = 400.0;
const HERO_IMAGE: &str = "/img/hero-workspace.jpg";

/// Feeds browser events into the session and carries out the effects it returns.
#[derive(Clone)]
struct Dispatcher {
    session: Rc<RefCell<PageSession>>,
    transport: Rc<ContactTransport>,
    frames: Rc<RefCell<HashMap<u64, AnimationFrame>>>,
    next_frame_key: Rc<Cell<u64>>,
    rerender: UseForceUpdateHandle,
}

impl Dispatcher {
    fn send(&self, event: PageEvent) {
        let (changed, effects) = {
            let mut session = self.session.borrow_mut();
            let before = session.revision();
            let effects = session.dispatch(event, js_sys::Date::now());
            (session.revision() != before, effects)
        };
        if changed {
            self.rerender.force_update();
        }

        for effect in effects {
            self.perform(effect);
        }
    }

    fn on<E: 'static>(&self, map: impl Fn(E) -> PageEvent + 'static) -> Callback<E> {
        let dispatcher = self.clone();
        Callback::from(move |event: E| dispatcher.send(map(event)))
    }

    fn perform(&self, effect: Effect) {
        match effect {
            Effect::After { delay_ms, event } => {
                let dispatcher = self.clone();
                Timeout::new(delay_ms.max(0.0) as u32, move || dispatcher.send(event)).forget();
            }
            Effect::NextFrame(event) => self.send_next_frame(event),
            Effect::Deliver(submission) => {
                let dispatcher = self.clone();
                let transport = Rc::clone(&self.transport);
                spawn_local(async move {
                    let result = transport.deliver(&submission).await;
                    dispatcher.send(PageEvent::ContactSettled(result));
                });
            }
            Effect::ScrollTo { top } => smooth_scroll_to(top),
            Effect::Log {
                level,
                event,
                fields,
            } => log_event(level, event, fields),
        }
    }

    fn send_next_frame(&self, event: PageEvent) {
        let key = self.next_frame_key.get();
        self.next_frame_key.set(key.wrapping_add(1));

        let dispatcher = self.clone();
        let handle = request_animation_frame(move |_| {
            dispatcher.frames.borrow_mut().remove(&key);
            dispatcher.send(event);
        });
        self.frames.borrow_mut().insert(key, handle);
    }
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn section_offset_top(id: &str) -> Option<f64> {
    let element = window()?.document()?.get_element_by_id(id)?;
    let element = element.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(element.offset_top()))
}

fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn measure_label(tooltip_ref: &NodeRef) -> LabelSize {
    tooltip_ref
        .cast::<Element>()
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            LabelSize {
                width: rect.width(),
                height: rect.height(),
            }
        })
        .unwrap_or_default()
}

fn pointer_of(event: &MouseEvent) -> Pointer {
    Pointer {
        page_x: f64::from(event.page_x()),
        page_y: f64::from(event.page_y()),
    }
}

fn install_listeners(dispatcher: &Dispatcher) -> Vec<EventListener> {
    let Some(win) = window() else {
        return Vec::new();
    };
    let Some(document) = win.document() else {
        return Vec::new();
    };

    let mut listeners = Vec::new();

    let on_scroll = {
        let dispatcher = dispatcher.clone();
        let scrolled_window = win.clone();
        EventListener::new(&win, "scroll", move |_event: &Event| {
            let scroll_y = scrolled_window.scroll_y().unwrap_or(0.0);
            let (_, viewport_height) = viewport_size();
            dispatcher.send(PageEvent::Scrolled {
                scroll_y,
                viewport_height,
            });
        })
    };
    listeners.push(on_scroll);

    let on_resize = {
        let dispatcher = dispatcher.clone();
        EventListener::new(&win, "resize", move |_event: &Event| {
            let (viewport_width, _) = viewport_size();
            dispatcher.send(PageEvent::Resized { viewport_width });
        })
    };
    listeners.push(on_resize);

    let on_keydown = {
        let dispatcher = dispatcher.clone();
        EventListener::new(&document, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            dispatcher.send(PageEvent::KeyPressed(Key::from_key_name(&event.key())));
        })
    };
    listeners.push(on_keydown);

    // Load errors do not bubble, so listen in the capture phase.
    let on_resource_error = {
        let dispatcher = dispatcher.clone();
        EventListener::new_with_options(
            &document,
            "error",
            EventListenerOptions::run_in_capture_phase(),
            move |event: &Event| {
                let Some(image) = event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
                else {
                    return;
                };
                dispatcher.send(PageEvent::ResourceFailed { src: image.src() });
            },
        )
    };
    listeners.push(on_resource_error);

    listeners
}

struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_viewport(
    options: ObserverOptions,
    selector: &str,
    on_visible: impl Fn(&Element) + 'static,
) -> Option<ViewportObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(&entry.target());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;

    let nodes = window()?.document()?.query_selector_all(selector).ok()?;
    for index in 0..nodes.length() {
        if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }

    Some(ViewportObserver {
        observer,
        _callback: callback,
    })
}

fn install_observers(dispatcher: &Dispatcher) -> Vec<ViewportObserver> {
    let mut observers = Vec::new();

    for group in [RevealGroup::Card, RevealGroup::Section] {
        let dispatcher = dispatcher.clone();
        let observer = observe_viewport(group.options(), group.selector(), move |element| {
            if let Some(key) = element.get_attribute(REVEAL_KEY_ATTR) {
                dispatcher.send(PageEvent::Revealed(key));
            }
        });
        observers.extend(observer);
    }

    let dispatcher = dispatcher.clone();
    observers.extend(observe_viewport(METRICS_TRIGGER, ".metrics", move |_| {
        dispatcher.send(PageEvent::MetricsVisible);
    }));

    observers
}

fn section_style(revealed: bool) -> &'static str {
    if revealed {
        "opacity: 1; transform: translateY(0); transition: opacity 0.8s ease, transform 0.8s ease;"
    } else {
        "opacity: 0; transform: translateY(30px); transition: opacity 0.8s ease, transform 0.8s ease;"
    }
}

fn details_style(expanded: bool) -> String {
    let (max_height, opacity) = if expanded {
        (DETAILS_MAX_HEIGHT_PX, 1)
    } else {
        (0, 0)
    };
    format!(
        "max-height: {max_height}px; opacity: {opacity}; overflow: hidden; transition: max-height 0.4s ease, opacity 0.4s ease;"
    )
}

fn notification_style(notification: &Notification, slot: usize) -> String {
    let offset_x = if notification.is_on_screen() {
        0.0
    } else {
        NOTIFICATION_OFFSCREEN_X
    };
    let top = NOTIFICATION_STACK_TOP + NOTIFICATION_STACK_STEP * slot as f64;

    format!(
        "top: {top:.0}px; background: {}; transform: translateX({offset_x:.0}px);",
        notification.severity.background()
    )
}

fn section_attrs(session: &PageSession, id: &str) -> (String, &'static str) {
    let key = reveal_key(RevealGroup::Section, id);
    let style = section_style(session.reveal().is_revealed(&key));
    (key, style)
}

fn card_reveal(session: &PageSession, id: &str) -> (String, Option<&'static str>) {
    let key = reveal_key(RevealGroup::Card, id);
    let class = session.reveal().is_revealed(&key).then_some("fade-in");
    (key, class)
}

fn section_link(dispatcher: &Dispatcher, target: &'static str) -> Callback<MouseEvent> {
    dispatcher.on(move |event: MouseEvent| {
        event.prevent_default();
        PageEvent::SectionLinkClicked {
            section_offset_top: section_offset_top(target).unwrap_or(0.0),
        }
    })
}

fn render_nav(session: &PageSession, dispatcher: &Dispatcher) -> Html {
    let open = session.nav().is_open();
    let navbar_style = format!("background: {};", session.scroll().navbar_background);

    let links = NAV_SECTIONS.iter().map(|section: &Section| {
        let target = section.id;
        let onclick = dispatcher.on(move |event: MouseEvent| {
            event.prevent_default();
            PageEvent::NavLinkClicked {
                section_offset_top: section_offset_top(target),
            }
        });
        html! {
            <li key={section.id}>
                <a class="nav-link" href={format!("#{}", section.id)} onclick={onclick}>{section.label}</a>
            </li>
        }
    });

    html! {
        <nav class="navbar" style={navbar_style}>
            <div class="nav-container">
                <a class="nav-logo" href="#home" onclick={section_link(dispatcher, "home")}>{AGENCY_NAME}</a>
                <ul class={classes!("nav-menu", open.then_some("active"))}>
                    { for links }
                </ul>
                <button
                    class={classes!("nav-toggle", open.then_some("active"))}
                    type="button"
                    aria-label="Toggle navigation"
                    aria-expanded={open.to_string()}
                    onclick={dispatcher.on(|_: MouseEvent| PageEvent::NavToggleClicked)}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

fn render_hero(session: &PageSession, dispatcher: &Dispatcher) -> Html {
    let (key, style) = section_attrs(session, "home");
    let particles_style = format!(
        "transform: translateY({:.1}px);",
        session.scroll().parallax_offset
    );

    html! {
        <section id="home" class="hero" data-reveal-group="section" data-reveal-key={key} style={style}>
            <div class="hero-particles" style={particles_style}></div>
            <div class="hero-content">
                <h1 class="hero-title">{"We build software that moves your business forward"}</h1>
                <p class="hero-subtitle">
                    {"Product strategy, engineering and cloud operations from one senior team."}
                </p>
                <div class="hero-buttons">
                    <a class="cta-button primary" href="#contact" onclick={section_link(dispatcher, "contact")}>
                        {"Start a project"}
                    </a>
                    <a class="cta-button secondary" href="#services" onclick={section_link(dispatcher, "services")}>
                        {"Our services"}
                    </a>
                </div>
            </div>
            <img class="hero-visual" src={HERO_IMAGE} alt="Team collaborating in the TechFlow studio" loading="lazy" />
        </section>
    }
}

fn render_metrics(session: &PageSession) -> Html {
    let (key, style) = section_attrs(session, "metrics");

    let cards = METRICS.iter().enumerate().map(|(index, metric)| {
        let card_id = format!("metric-{index}");
        let (card_key, fade) = card_reveal(session, &card_id);
        let displayed = session.counters().displayed(index).unwrap_or(0);
        html! {
            <div key={card_id} class={classes!("metric-card", fade)} data-reveal-group="card" data-reveal-key={card_key}>
                <span class="metric-number" data-target={metric.target.to_string()}>{format_grouped(displayed)}</span>
                <span class="metric-suffix">{metric.suffix}</span>
                <p class="metric-label">{metric.label}</p>
            </div>
        }
    });

    html! {
        <section class="metrics" data-reveal-group="section" data-reveal-key={key} style={style}>
            <div class="metrics-grid">{ for cards }</div>
        </section>
    }
}

fn render_services(session: &PageSession, dispatcher: &Dispatcher) -> Html {
    let (key, style) = section_attrs(session, "services");

    let cards = SERVICES.iter().enumerate().map(|(index, service)| {
        let (card_key, fade) = card_reveal(session, service.slug);
        let expanded = session.cards().is_expanded(index);
        html! {
            <article
                key={service.slug}
                class={classes!("service-card", fade, expanded.then_some("expanded"))}
                data-reveal-group="card"
                data-reveal-key={card_key}
                onmouseenter={dispatcher.on(move |_: MouseEvent| PageEvent::CardHoverEnter(index))}
                onmouseleave={dispatcher.on(move |_: MouseEvent| PageEvent::CardHoverLeave(index))}
                onclick={dispatcher.on(move |_: MouseEvent| PageEvent::CardClicked(index))}
            >
                <div class="service-icon" aria-hidden="true">{service.icon}</div>
                <h3>{service.title}</h3>
                <p>{service.summary}</p>
                <ul class="service-details" style={details_style(expanded)} aria-hidden={(!expanded).to_string()}>
                    { for service.details.iter().map(|detail| html! { <li>{*detail}</li> }) }
                </ul>
            </article>
        }
    });

    html! {
        <section id="services" class="services" data-reveal-group="section" data-reveal-key={key} style={style}>
            <h2 class="section-title">{"Services"}</h2>
            <div class="services-grid">{ for cards }</div>
        </section>
    }
}

fn render_technology(session: &PageSession, dispatcher: &Dispatcher, tooltip_ref: &NodeRef) -> Html {
    let (key, style) = section_attrs(session, "technology");

    let items = TECH_STACK.iter().map(|item| {
        let (card_key, fade) = card_reveal(session, item.name);
        let label = item.tooltip;

        let onmouseenter = {
            let tooltip_ref = tooltip_ref.clone();
            dispatcher.on(move |event: MouseEvent| PageEvent::TooltipEnter {
                label: label.map(str::to_string),
                pointer: pointer_of(&event),
                size: measure_label(&tooltip_ref),
                viewport_width: viewport_size().0,
            })
        };
        let onmousemove = {
            let tooltip_ref = tooltip_ref.clone();
            dispatcher.on(move |event: MouseEvent| PageEvent::TooltipMove {
                pointer: pointer_of(&event),
                size: measure_label(&tooltip_ref),
                viewport_width: viewport_size().0,
            })
        };

        html! {
            <div
                key={item.name}
                class={classes!("tech-item", fade)}
                data-reveal-group="card"
                data-reveal-key={card_key}
                data-tooltip={label.unwrap_or_default()}
                onmouseenter={onmouseenter}
                onmousemove={onmousemove}
                onmouseleave={dispatcher.on(|_: MouseEvent| PageEvent::TooltipLeave)}
            >
                {item.name}
            </div>
        }
    });

    html! {
        <section id="technology" class="technology" data-reveal-group="section" data-reveal-key={key} style={style}>
            <h2 class="section-title">{"Technology"}</h2>
            <div class="tech-grid">{ for items }</div>
        </section>
    }
}

fn render_reviews(session: &PageSession) -> Html {
    let (key, style) = section_attrs(session, "reviews");

    let cards = REVIEWS.iter().enumerate().map(|(index, review)| {
        let card_id = format!("review-{index}");
        let (card_key, fade) = card_reveal(session, &card_id);
        html! {
            <blockquote key={card_id} class={classes!("review-card", fade)} data-reveal-group="card" data-reveal-key={card_key}>
                <p>{review.quote}</p>
                <footer>
                    <strong>{review.author}</strong>
                    <span class="muted">{review.role}</span>
                </footer>
            </blockquote>
        }
    });

    html! {
        <section id="reviews" class="reviews" data-reveal-group="section" data-reveal-key={key} style={style}>
            <h2 class="section-title">{"What clients say"}</h2>
            <div class="reviews-grid">{ for cards }</div>
        </section>
    }
}

fn text_input(dispatcher: &Dispatcher, field: ContactField) -> Callback<InputEvent> {
    dispatcher.on(move |event: InputEvent| {
        let value = event
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| {
                event
                    .target_dyn_into::<HtmlTextAreaElement>()
                    .map(|area| area.value())
            })
            .unwrap_or_default();
        PageEvent::ContactFieldChanged(field, value)
    })
}

fn render_contact(session: &PageSession, dispatcher: &Dispatcher) -> Html {
    let (key, style) = section_attrs(session, "contact");
    let (info_key, info_fade) = card_reveal(session, "contact-info");
    let (form_key, form_fade) = card_reveal(session, "contact-form");

    let form = session.contact();
    let fields = form.fields();
    let submitting = form.is_submitting();

    let onsubmit = dispatcher.on(|event: SubmitEvent| {
        event.prevent_default();
        PageEvent::ContactSubmitted
    });
    let onchange_service = dispatcher.on(|event: Event| {
        let value = event
            .target_dyn_into::<HtmlSelectElement>()
            .map(|select| select.value())
            .unwrap_or_default();
        PageEvent::ContactFieldChanged(ContactField::Service, value)
    });

    let options = SERVICE_OPTIONS.iter().map(|(value, label)| {
        html! {
            <option key={*value} value={*value} selected={fields.service == *value}>{*label}</option>
        }
    });

    html! {
        <section id="contact" class="contact" data-reveal-group="section" data-reveal-key={key} style={style}>
            <h2 class="section-title">{"Let's work together"}</h2>
            <div class="contact-grid">
                <div class={classes!("contact-card", info_fade)} data-reveal-group="card" data-reveal-key={info_key}>
                    <h3>{"Talk to us"}</h3>
                    <p>{"hello@techflow.agency"}</p>
                    <p class="muted">{"We reply within one business day."}</p>
                </div>
                <form
                    id="contactForm"
                    class={classes!("contact-form", "contact-card", form_fade)}
                    data-reveal-group="card"
                    data-reveal-key={form_key}
                    novalidate="novalidate"
                    onsubmit={onsubmit}
                >
                    <label for="name">{"Name"}</label>
                    <input id="name" type="text" value={fields.name.clone()} oninput={text_input(dispatcher, ContactField::Name)} />
                    <label for="email">{"Email"}</label>
                    <input id="email" type="email" value={fields.email.clone()} oninput={text_input(dispatcher, ContactField::Email)} />
                    <label for="service">{"Service"}</label>
                    <select id="service" onchange={onchange_service}>{ for options }</select>
                    <label for="message">{"Message"}</label>
                    <textarea id="message" rows="5" value={fields.message.clone()} oninput={text_input(dispatcher, ContactField::Message)} />
                    <button
                        class={classes!("submit-button", submitting.then_some("loading"))}
                        type="submit"
                        disabled={submitting}
                    >
                        <span>{form.button_label()}</span>
                        <div class="button-ripple"></div>
                    </button>
                </form>
            </div>
        </section>
    }
}

fn render_notifications(session: &PageSession, dispatcher: &Dispatcher) -> Html {
    let items = session.notifications().iter().enumerate().map(|(slot, notification)| {
        let id = notification.id;
        html! {
            <div
                key={id.get()}
                class={classes!("notification", notification.severity.class_name())}
                style={notification_style(notification, slot)}
                role="status"
            >
                <span>{notification.message.clone()}</span>
                <button
                    class="notification-close"
                    type="button"
                    aria-label="Dismiss notification"
                    onclick={dispatcher.on(move |_: MouseEvent| PageEvent::NotificationDismissed(id))}
                >
                    {"×"}
                </button>
            </div>
        }
    });

    html! { <div class="notification-stack" aria-live="polite">{ for items }</div> }
}

fn render_tooltip(session: &PageSession, tooltip_ref: &NodeRef) -> Html {
    let tooltip = session.tooltip();
    let (x, y) = tooltip.position();
    let opacity = if tooltip.is_visible() { 1 } else { 0 };
    let style = format!("left: {x:.0}px; top: {y:.0}px; opacity: {opacity};");

    html! {
        <div id="tooltip" class="tooltip" ref={tooltip_ref.clone()} style={style} role="tooltip">
            {tooltip.text().unwrap_or_default().to_string()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let session = use_mut_ref(PageSession::for_site);
    let rerender = use_force_update();
    let tooltip_ref = use_node_ref();

    let dispatcher = {
        let session = session.clone();
        let transport = props.config.transport.clone();
        use_memo((), move |_| Dispatcher {
            session,
            transport: Rc::new(transport),
            frames: Rc::default(),
            next_frame_key: Rc::default(),
            rerender,
        })
    };

    {
        let dispatcher = (*dispatcher).clone();
        use_effect_with((), move |_| {
            let listeners = install_listeners(&dispatcher);
            let observers = install_observers(&dispatcher);
            move || {
                drop(observers);
                drop(listeners);
            }
        });
    }

    // The size sent on enter is read before the new text renders.
    let tooltip_text = session.borrow().tooltip().text().map(str::to_string);
    {
        let dispatcher = (*dispatcher).clone();
        let tooltip_ref = tooltip_ref.clone();
        use_effect_with(tooltip_text, move |_| {
            dispatcher.send(PageEvent::TooltipMeasured(measure_label(&tooltip_ref)));
        });
    }

    let state = session.borrow();

    html! {
        <>
            { render_nav(&state, &dispatcher) }
            <main>
                { render_hero(&state, &dispatcher) }
                { render_metrics(&state) }
                { render_services(&state, &dispatcher) }
                { render_technology(&state, &dispatcher, &tooltip_ref) }
                { render_reviews(&state) }
                { render_contact(&state, &dispatcher) }
            </main>
            <footer class="site-footer">
                <p class="muted">{format!("© {AGENCY_NAME} Agency")}</p>
            </footer>
            { render_tooltip(&state, &tooltip_ref) }
            { render_notifications(&state, &dispatcher) }
        </>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");

    let config = SiteConfig::from_attributes(|name| root.get_attribute(name));
    logging::set_max_level(config.log_level);
    log_event(
        LogLevel::Info,
        "site.ready",
        json!({ "transport": config.transport.kind() }),
    );

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
