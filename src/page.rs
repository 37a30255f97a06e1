//! Page-wide interaction state and the event dispatch table.
//!
//! Every browser event the page reacts to is a [`PageEvent`]. [`PageSession::dispatch`]
//! applies it to the session and returns the [`Effect`]s the host must perform (timers,
//! animation frames, submissions, scrolling, logging). Rendering reads the session back
//! through its accessors, so no transition here touches the document directly.

use crate::cards::ServiceCards;
use crate::config::{
    COUNTER_DURATION_MS, COUNTER_FRAME_INTERVAL_MS, NOTIFICATION_EXIT_MS,
    NOTIFICATION_LIFETIME_MS, RESIZE_DEBOUNCE_MS, SCROLL_THROTTLE_MS,
};
use crate::contact::{
    ContactField, ContactForm, ContactSubmission, SubmitError, SubmitOutcome, SUCCESS_MESSAGE,
};
use crate::content;
use crate::counter::MetricCounters;
use crate::logging::LogLevel;
use crate::nav::{closes_menu_at_width, section_scroll_top, NavState, ScrollAppearance};
use crate::notify::{NotificationCenter, NotificationId, Severity};
use crate::rate_limit::{Debounce, DebounceTicket, Throttle};
use crate::reveal::RevealTracker;
use crate::tooltip::{LabelSize, Pointer, TooltipState};
use serde_json::{json, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Other,
}

impl Key {
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    NavToggleClicked,
    /// A navbar link; the offset is `None` when the target section is missing.
    NavLinkClicked { section_offset_top: Option<f64> },
    /// Any other in-page link, such as the hero buttons.
    SectionLinkClicked { section_offset_top: f64 },
    KeyPressed(Key),
    Scrolled { scroll_y: f64, viewport_height: f64 },
    Resized { viewport_width: f64 },
    ResizeSettled(DebounceTicket),
    Revealed(String),
    MetricsVisible,
    CounterFrame,
    CardHoverEnter(usize),
    CardHoverLeave(usize),
    CardClicked(usize),
    TooltipEnter {
        label: Option<String>,
        pointer: Pointer,
        size: LabelSize,
        viewport_width: f64,
    },
    TooltipMove {
        pointer: Pointer,
        size: LabelSize,
        viewport_width: f64,
    },
    /// Size of the tooltip once its current text has been rendered.
    TooltipMeasured(LabelSize),
    TooltipLeave,
    ContactFieldChanged(ContactField, String),
    ContactSubmitted,
    ContactSettled(Result<(), SubmitError>),
    NotificationShown(NotificationId),
    NotificationDismissed(NotificationId),
    NotificationRemoved(NotificationId),
    ResourceFailed { src: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    After { delay_ms: f64, event: PageEvent },
    NextFrame(PageEvent),
    /// Hand the submission to the contact transport and report back with
    /// [`PageEvent::ContactSettled`].
    Deliver(ContactSubmission),
    ScrollTo { top: f64 },
    Log {
        level: LogLevel,
        event: &'static str,
        fields: Value,
    },
}

pub struct PageSession {
    nav: NavState,
    scroll: ScrollAppearance,
    scroll_throttle: Throttle,
    resize_debounce: Debounce,
    pending_viewport_width: Option<f64>,
    reveal: RevealTracker,
    counters: MetricCounters,
    cards: ServiceCards,
    tooltip: TooltipState,
    contact: ContactForm,
    notifications: NotificationCenter,
    revision: u64,
}

impl PageSession {
    pub fn new(metric_targets: impl IntoIterator<Item = u64>, service_count: usize) -> Self {
        Self {
            nav: NavState::default(),
            scroll: ScrollAppearance::default(),
            scroll_throttle: Throttle::new(SCROLL_THROTTLE_MS),
            resize_debounce: Debounce::new(RESIZE_DEBOUNCE_MS),
            pending_viewport_width: None,
            reveal: RevealTracker::default(),
            counters: MetricCounters::new(
                metric_targets,
                COUNTER_DURATION_MS,
                COUNTER_FRAME_INTERVAL_MS,
            ),
            cards: ServiceCards::new(service_count),
            tooltip: TooltipState::default(),
            contact: ContactForm::default(),
            notifications: NotificationCenter::default(),
            revision: 0,
        }
    }

    pub fn for_site() -> Self {
        Self::new(content::metric_targets(), content::SERVICES.len())
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn scroll(&self) -> ScrollAppearance {
        self.scroll
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn counters(&self) -> &MetricCounters {
        &self.counters
    }

    pub fn cards(&self) -> &ServiceCards {
        &self.cards
    }

    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Bumped by every event that changes what the page renders.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn dispatch(&mut self, event: PageEvent, now_ms: f64) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.apply(event, now_ms, &mut effects) {
            self.revision = self.revision.wrapping_add(1);
        }
        effects
    }

    /// Returns whether rendered state changed.
    fn apply(&mut self, event: PageEvent, now_ms: f64, effects: &mut Vec<Effect>) -> bool {
        match event {
            PageEvent::NavToggleClicked => {
                let open = self.nav.toggle();
                effects.push(log(LogLevel::Debug, "nav.menu_toggled", json!({ "open": open })));
                true
            }
            PageEvent::NavLinkClicked { section_offset_top } => {
                if let Some(offset_top) = section_offset_top {
                    effects.push(Effect::ScrollTo {
                        top: section_scroll_top(offset_top),
                    });
                }
                self.nav.close()
            }
            PageEvent::SectionLinkClicked { section_offset_top } => {
                effects.push(Effect::ScrollTo {
                    top: section_scroll_top(section_offset_top),
                });
                false
            }
            PageEvent::KeyPressed(Key::Escape) => self.nav.close(),
            PageEvent::KeyPressed(Key::Tab | Key::Other) => false,
            PageEvent::Scrolled {
                scroll_y,
                viewport_height,
            } => {
                if !self.scroll_throttle.admit(now_ms) {
                    return false;
                }
                let before = self.scroll;
                self.scroll.update(scroll_y, viewport_height);
                self.scroll != before
            }
            PageEvent::Resized { viewport_width } => {
                self.pending_viewport_width = Some(viewport_width);
                let ticket = self.resize_debounce.schedule();
                effects.push(Effect::After {
                    delay_ms: self.resize_debounce.wait_ms(),
                    event: PageEvent::ResizeSettled(ticket),
                });
                false
            }
            PageEvent::ResizeSettled(ticket) => {
                if !self.resize_debounce.fire(ticket) {
                    return false;
                }
                let wide = self
                    .pending_viewport_width
                    .take()
                    .is_some_and(closes_menu_at_width);
                let closed = wide && self.nav.close();
                let hid = self.tooltip.is_visible();
                self.tooltip.hide();
                closed || hid
            }
            PageEvent::Revealed(key) => self.reveal.mark_visible(&key),
            PageEvent::MetricsVisible => {
                if !self.counters.start() {
                    return false;
                }
                effects.push(log(LogLevel::Info, "counters.started", Value::Null));
                if self.counters.is_running() {
                    effects.push(Effect::NextFrame(PageEvent::CounterFrame));
                }
                true
            }
            PageEvent::CounterFrame => {
                if !self.counters.is_running() {
                    return false;
                }
                if self.counters.advance() {
                    effects.push(Effect::NextFrame(PageEvent::CounterFrame));
                }
                true
            }
            PageEvent::CardHoverEnter(index) => self.update_cards(|cards| cards.hover_enter(index)),
            PageEvent::CardHoverLeave(index) => self.update_cards(|cards| cards.hover_leave(index)),
            PageEvent::CardClicked(index) => self.update_cards(|cards| cards.click(index)),
            PageEvent::TooltipEnter {
                label,
                pointer,
                size,
                viewport_width,
            } => self.update_tooltip(|tooltip| {
                tooltip.show(label.as_deref(), pointer, size, viewport_width);
            }),
            PageEvent::TooltipMove {
                pointer,
                size,
                viewport_width,
            } => self.update_tooltip(|tooltip| tooltip.move_to(pointer, size, viewport_width)),
            PageEvent::TooltipMeasured(size) => self.tooltip.remeasure(size),
            PageEvent::TooltipLeave => self.update_tooltip(TooltipState::hide),
            PageEvent::ContactFieldChanged(field, value) => {
                self.contact.set_field(field, value);
                true
            }
            PageEvent::ContactSubmitted => match self.contact.submit() {
                SubmitOutcome::Ignored => false,
                SubmitOutcome::Invalid(error) => {
                    effects.push(log(
                        LogLevel::Debug,
                        "contact.validation_failed",
                        json!({ "field": error.field().as_str() }),
                    ));
                    self.notify(error.to_string(), Severity::Error, effects);
                    true
                }
                SubmitOutcome::Submitting(submission) => {
                    effects.push(log(
                        LogLevel::Info,
                        "contact.submitted",
                        json!({ "service": submission.service }),
                    ));
                    effects.push(Effect::Deliver(submission));
                    true
                }
            },
            PageEvent::ContactSettled(result) => {
                if !self.contact.is_submitting() {
                    return false;
                }

                self.contact.settle(&result);
                match result {
                    Ok(()) => self.notify(SUCCESS_MESSAGE.to_string(), Severity::Success, effects),
                    Err(error) => {
                        effects.push(log(
                            LogLevel::Warn,
                            "contact.submit_failed",
                            json!({ "error": format!("{error:?}") }),
                        ));
                        self.notify(error.to_string(), Severity::Error, effects);
                    }
                }
                true
            }
            PageEvent::NotificationShown(id) => self.notifications.mark_shown(id),
            PageEvent::NotificationDismissed(id) => {
                if !self.notifications.begin_dismiss(id) {
                    return false;
                }
                effects.push(Effect::After {
                    delay_ms: NOTIFICATION_EXIT_MS,
                    event: PageEvent::NotificationRemoved(id),
                });
                true
            }
            PageEvent::NotificationRemoved(id) => self.notifications.remove(id),
            PageEvent::ResourceFailed { src } => {
                effects.push(log(LogLevel::Warn, "resource.load_failed", json!({ "src": src })));
                false
            }
        }
    }

    fn update_cards(&mut self, change: impl FnOnce(&mut ServiceCards)) -> bool {
        let before = self.cards.expanded();
        change(&mut self.cards);
        self.cards.expanded() != before
    }

    fn update_tooltip(&mut self, change: impl FnOnce(&mut TooltipState)) -> bool {
        let before = self.tooltip.clone();
        change(&mut self.tooltip);
        self.tooltip != before
    }

    fn notify(&mut self, message: String, severity: Severity, effects: &mut Vec<Effect>) {
        let id = self.notifications.emit(message, severity);
        effects.push(Effect::NextFrame(PageEvent::NotificationShown(id)));
        effects.push(Effect::After {
            delay_ms: NOTIFICATION_LIFETIME_MS,
            event: PageEvent::NotificationDismissed(id),
        });
    }
}

fn log(level: LogLevel, event: &'static str, fields: Value) -> Effect {
    Effect::Log {
        level,
        event,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SUBMIT_LATENCY_MS;
    use crate::content::METRICS;
    use crate::contact::{FormPhase, SENDING_LABEL};
    use crate::notify::Phase;

    /// Runs a session against a virtual clock, executing its effects the way the
    /// browser host does with the simulated transport.
    struct Harness {
        session: PageSession,
        now: f64,
        seq: u64,
        timers: Vec<(f64, u64, PageEvent)>,
        frames: Vec<PageEvent>,
        deliveries: Vec<ContactSubmission>,
        scrolls: Vec<f64>,
        logs: Vec<&'static str>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                session: PageSession::for_site(),
                now: 0.0,
                seq: 0,
                timers: Vec::new(),
                frames: Vec::new(),
                deliveries: Vec::new(),
                scrolls: Vec::new(),
                logs: Vec::new(),
            }
        }

        fn send(&mut self, event: PageEvent) {
            let effects = self.session.dispatch(event, self.now);
            self.absorb(effects);
        }

        fn absorb(&mut self, effects: Vec<Effect>) {
            for effect in effects {
                match effect {
                    Effect::After { delay_ms, event } => self.schedule(delay_ms, event),
                    Effect::NextFrame(event) => self.frames.push(event),
                    Effect::Deliver(submission) => {
                        self.deliveries.push(submission);
                        self.schedule(
                            f64::from(DEFAULT_SUBMIT_LATENCY_MS),
                            PageEvent::ContactSettled(Ok(())),
                        );
                    }
                    Effect::ScrollTo { top } => self.scrolls.push(top),
                    Effect::Log { event, .. } => self.logs.push(event),
                }
            }
        }

        fn schedule(&mut self, delay_ms: f64, event: PageEvent) {
            self.seq += 1;
            self.timers.push((self.now + delay_ms, self.seq, event));
        }

        fn advance_to(&mut self, until: f64) {
            loop {
                let next = self
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _, _))| *due <= until)
                    .min_by(|(_, a), (_, b)| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
                    .map(|(index, _)| index);

                let Some(index) = next else {
                    break;
                };
                let (due, _, event) = self.timers.remove(index);
                self.now = due;
                self.send(event);
            }
            self.now = until;
        }

        fn run_frames(&mut self) -> usize {
            let mut count = 0;
            while !self.frames.is_empty() {
                let batch = std::mem::take(&mut self.frames);
                self.now += COUNTER_FRAME_INTERVAL_MS;
                for event in batch {
                    self.send(event);
                }
                count += 1;
                assert!(count < 10_000, "frames never settled");
            }
            count
        }

        fn fill_contact(&mut self, name: &str, email: &str, service: &str, message: &str) {
            self.send(PageEvent::ContactFieldChanged(ContactField::Name, name.to_string()));
            self.send(PageEvent::ContactFieldChanged(ContactField::Email, email.to_string()));
            self.send(PageEvent::ContactFieldChanged(ContactField::Service, service.to_string()));
            self.send(PageEvent::ContactFieldChanged(ContactField::Message, message.to_string()));
        }

        fn error_notifications(&self) -> usize {
            self.session
                .notifications()
                .iter()
                .filter(|notification| notification.severity == Severity::Error)
                .count()
        }
    }

    #[test]
    fn escape_and_links_close_the_menu() {
        let mut harness = Harness::new();

        harness.send(PageEvent::NavToggleClicked);
        assert!(harness.session.nav().is_open());
        harness.send(PageEvent::KeyPressed(Key::from_key_name("Escape")));
        assert!(!harness.session.nav().is_open());

        harness.send(PageEvent::NavToggleClicked);
        harness.send(PageEvent::NavLinkClicked {
            section_offset_top: Some(1_000.0),
        });
        assert!(!harness.session.nav().is_open());
        assert_eq!(harness.scrolls, vec![930.0]);

        harness.send(PageEvent::NavToggleClicked);
        harness.send(PageEvent::KeyPressed(Key::Tab));
        assert!(harness.session.nav().is_open());
    }

    #[test]
    fn resize_is_debounced_to_the_last_width() {
        let mut harness = Harness::new();
        harness.send(PageEvent::NavToggleClicked);
        harness.send(PageEvent::TooltipEnter {
            label: Some("Rust".to_string()),
            pointer: Pointer {
                page_x: 50.0,
                page_y: 200.0,
            },
            size: LabelSize::default(),
            viewport_width: 1_280.0,
        });

        harness.send(PageEvent::Resized {
            viewport_width: 1_024.0,
        });
        harness.advance_to(100.0);
        harness.send(PageEvent::Resized {
            viewport_width: 500.0,
        });
        harness.advance_to(349.0);
        assert!(harness.session.tooltip().is_visible(), "still inside debounce window");

        harness.advance_to(350.0);
        assert!(harness.session.nav().is_open(), "narrow viewport keeps menu");
        assert!(!harness.session.tooltip().is_visible());

        harness.send(PageEvent::Resized {
            viewport_width: 1_024.0,
        });
        harness.advance_to(600.0);
        assert!(!harness.session.nav().is_open());
    }

    #[test]
    fn scroll_updates_are_throttled() {
        let mut harness = Harness::new();

        harness.send(PageEvent::Scrolled {
            scroll_y: 300.0,
            viewport_height: 900.0,
        });
        assert_eq!(harness.session.scroll().parallax_offset, 150.0);

        harness.advance_to(5.0);
        harness.send(PageEvent::Scrolled {
            scroll_y: 0.0,
            viewport_height: 900.0,
        });
        assert_eq!(harness.session.scroll().parallax_offset, 150.0);

        harness.advance_to(16.0);
        harness.send(PageEvent::Scrolled {
            scroll_y: 0.0,
            viewport_height: 900.0,
        });
        assert_eq!(harness.session.scroll().parallax_offset, 0.0);
        assert_eq!(harness.session.scroll().navbar_background, "rgba(10, 10, 10, 0.9)");
    }

    #[test]
    fn dropped_scroll_and_resize_events_leave_revision_alone() {
        let mut harness = Harness::new();
        let scrolled = |scroll_y| PageEvent::Scrolled {
            scroll_y,
            viewport_height: 900.0,
        };

        harness.send(scrolled(300.0));
        let after_first = harness.session.revision();
        assert_eq!(after_first, 1);

        harness.advance_to(5.0);
        harness.send(scrolled(320.0));
        assert_eq!(harness.session.revision(), after_first, "throttled scroll");

        harness.send(PageEvent::Resized {
            viewport_width: 1024.0,
        });
        harness.send(PageEvent::Resized {
            viewport_width: 1100.0,
        });
        harness.advance_to(5.0 + RESIZE_DEBOUNCE_MS);
        assert_eq!(
            harness.session.revision(),
            after_first,
            "settled resize with nothing to close or hide"
        );

        harness.advance_to(40.0 + RESIZE_DEBOUNCE_MS);
        harness.send(scrolled(320.0));
        assert_eq!(harness.session.revision(), after_first + 1);
    }

    #[test]
    fn tooltip_is_placed_again_with_the_rendered_size() {
        let mut harness = Harness::new();
        let pointer = Pointer {
            page_x: 1130.0,
            page_y: 300.0,
        };

        harness.send(PageEvent::TooltipEnter {
            label: Some("Memory-safe systems programming".to_string()),
            pointer,
            size: LabelSize {
                width: 40.0,
                height: 24.0,
            },
            viewport_width: 1280.0,
        });
        assert_eq!(harness.session.tooltip().position(), (1140.0, 290.0));
        let revision = harness.session.revision();

        harness.send(PageEvent::TooltipMeasured(LabelSize {
            width: 250.0,
            height: 24.0,
        }));
        assert_eq!(harness.session.tooltip().position(), (870.0, 290.0));
        assert_eq!(harness.session.revision(), revision + 1);

        harness.send(PageEvent::TooltipMeasured(LabelSize {
            width: 250.0,
            height: 24.0,
        }));
        assert_eq!(harness.session.revision(), revision + 1);
    }

    #[test]
    fn counters_ramp_once_to_their_targets() {
        let mut harness = Harness::new();

        harness.send(PageEvent::MetricsVisible);
        harness.send(PageEvent::MetricsVisible);
        assert_eq!(harness.frames.len(), 1, "second visibility does not start another ramp");

        let frames = harness.run_frames();
        assert!(frames >= 124, "ramp is frame paced, ran {frames} frames");

        for (index, metric) in METRICS.iter().enumerate() {
            assert_eq!(harness.session.counters().displayed(index), Some(metric.target));
        }
        assert_eq!(
            harness.logs.iter().filter(|event| **event == "counters.started").count(),
            1
        );

        harness.send(PageEvent::MetricsVisible);
        assert!(harness.frames.is_empty());
    }

    #[test]
    fn empty_name_never_submits_and_reports_one_error() {
        let mut harness = Harness::new();
        harness.fill_contact("", "foo@bar.com", "web-development", "Hi");

        harness.send(PageEvent::ContactSubmitted);

        assert_eq!(harness.session.contact().phase(), FormPhase::Idle);
        assert!(harness.deliveries.is_empty());
        assert_eq!(harness.session.notifications().len(), 1);
        assert_eq!(harness.error_notifications(), 1);
    }

    #[test]
    fn email_without_tld_is_rejected_and_full_address_submits() {
        let mut harness = Harness::new();
        harness.fill_contact("Ada", "foo@bar", "web-development", "Hi");

        harness.send(PageEvent::ContactSubmitted);
        assert!(harness.deliveries.is_empty());
        assert_eq!(
            harness.session.notifications().iter().next().map(|n| n.message.as_str()),
            Some("Please enter a valid email address.")
        );

        harness.send(PageEvent::ContactFieldChanged(
            ContactField::Email,
            "foo@bar.com".to_string(),
        ));
        harness.send(PageEvent::ContactSubmitted);
        assert_eq!(harness.session.contact().phase(), FormPhase::Submitting);
        assert_eq!(harness.session.contact().button_label(), SENDING_LABEL);
        assert_eq!(harness.deliveries.len(), 1);

        harness.send(PageEvent::ContactSubmitted);
        assert_eq!(harness.deliveries.len(), 1, "in-flight submission ignores resubmits");
    }

    #[test]
    fn simulated_submission_resets_form_and_notifies_success() {
        let mut harness = Harness::new();
        harness.fill_contact("Ada", "ada@example.com", "ai-solutions", "Let's talk");

        harness.send(PageEvent::ContactSubmitted);
        harness.advance_to(1_999.0);
        assert!(harness.session.contact().is_submitting());

        harness.advance_to(2_000.0);
        assert!(!harness.session.contact().is_submitting());
        assert_eq!(harness.session.contact().fields(), &ContactSubmission::default());
        let success: Vec<_> = harness
            .session
            .notifications()
            .iter()
            .filter(|n| n.severity == Severity::Success)
            .collect();
        assert_eq!(success.len(), 1);
        assert_eq!(success[0].message, SUCCESS_MESSAGE);
    }

    #[test]
    fn failed_delivery_keeps_fields_and_reports_error() {
        let mut harness = Harness::new();
        harness.fill_contact("Ada", "ada@example.com", "other", "Hello");

        harness.send(PageEvent::ContactSubmitted);
        harness.timers.clear();
        harness.send(PageEvent::ContactSettled(Err(SubmitError::Status(502))));

        assert_eq!(harness.session.contact().phase(), FormPhase::Idle);
        assert_eq!(harness.session.contact().fields().name, "Ada");
        assert_eq!(harness.error_notifications(), 1);
        assert!(harness.logs.contains(&"contact.submit_failed"));
    }

    #[test]
    fn stray_settlement_while_idle_is_ignored() {
        let mut harness = Harness::new();

        harness.send(PageEvent::ContactSettled(Ok(())));
        assert!(harness.session.notifications().is_empty());
    }

    #[test]
    fn expanding_b_collapses_a() {
        let mut harness = Harness::new();

        harness.send(PageEvent::CardClicked(0));
        harness.send(PageEvent::CardHoverEnter(1));

        assert!(!harness.session.cards().is_expanded(0));
        assert!(harness.session.cards().is_expanded(1));
    }

    #[test]
    fn notification_auto_dismisses_within_lifetime_plus_exit() {
        let mut harness = Harness::new();
        harness.send(PageEvent::ContactSubmitted);
        let id = harness
            .session
            .notifications()
            .iter()
            .next()
            .map(|n| n.id)
            .expect("validation error notification");

        harness.run_frames();
        assert_eq!(
            harness.session.notifications().get(id).map(|n| n.phase),
            Some(Phase::Shown)
        );

        harness.advance_to(5_000.0);
        assert_eq!(
            harness.session.notifications().get(id).map(|n| n.phase),
            Some(Phase::Leaving)
        );
        harness.advance_to(5_300.0);
        assert!(harness.session.notifications().get(id).is_none());
    }

    #[test]
    fn explicit_dismissal_removes_after_exit_transition() {
        let mut harness = Harness::new();
        harness.send(PageEvent::ContactSubmitted);
        let id = harness
            .session
            .notifications()
            .iter()
            .next()
            .map(|n| n.id)
            .expect("validation error notification");

        harness.advance_to(1_000.0);
        harness.send(PageEvent::NotificationDismissed(id));
        harness.send(PageEvent::NotificationDismissed(id));
        harness.advance_to(1_299.0);
        assert!(harness.session.notifications().get(id).is_some());

        harness.advance_to(1_300.0);
        assert!(harness.session.notifications().is_empty());

        harness.advance_to(6_000.0);
        assert!(harness.timers.is_empty());
    }

    #[test]
    fn broken_images_are_logged_only() {
        let mut harness = Harness::new();

        harness.send(PageEvent::ResourceFailed {
            src: "/img/team.png".to_string(),
        });

        assert_eq!(harness.logs, vec!["resource.load_failed"]);
        assert!(harness.session.notifications().is_empty());
    }

    #[test]
    fn reveal_marks_stick() {
        let mut harness = Harness::new();

        harness.send(PageEvent::Revealed("section:services".to_string()));
        harness.send(PageEvent::Revealed("section:services".to_string()));
        assert!(harness.session.reveal().is_revealed("section:services"));
    }
}
