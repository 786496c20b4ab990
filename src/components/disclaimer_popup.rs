use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::GateConfig;
use crate::content::DISCLAIMER_TEXT;
use crate::disclaimer::{DisclaimerGate, GatePoll, GateStart};
use crate::storage::BrowserStorage;

type SharedGate = Rc<RefCell<Option<DisclaimerGate<BrowserStorage>>>>;
type TimerSlot = Rc<RefCell<Option<Timeout>>>;

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// Arms the one-shot show timer. Dropping the Timeout held in `slot` clears it.
fn arm(delay_ms: u32, gate: SharedGate, slot: TimerSlot, rerender: Callback<()>) {
    let next_slot = slot.clone();
    let timeout = Timeout::new(delay_ms, move || {
        let poll = gate
            .borrow_mut()
            .as_mut()
            .map_or(GatePoll::Idle, |gate| gate.poll(now_ms()));

        match poll {
            GatePoll::Show => rerender.emit(()),
            GatePoll::Wait(remaining) => {
                // Browser fired early. We are inside the fired timeout, so it is
                // forgotten rather than dropped when the slot is replaced.
                let previous = next_slot.borrow_mut().take();
                if let Some(previous) = previous {
                    previous.forget();
                }
                arm(remaining, gate.clone(), next_slot.clone(), rerender.clone());
            }
            GatePoll::Idle => {}
        }
    });
    *slot.borrow_mut() = Some(timeout);
}

#[function_component(DisclaimerPopup)]
pub fn disclaimer_popup() -> Html {
    let gate: SharedGate = use_mut_ref(|| None);
    let trigger = use_force_update();
    let rerender = Callback::from(move |_: ()| trigger.force_update());

    {
        let rerender = rerender.clone();
        let gate = gate.clone();
        use_effect_with_deps(move |_| {
            let (started, start) = DisclaimerGate::start(BrowserStorage, GateConfig::default(), now_ms());
            *gate.borrow_mut() = Some(started);

            let slot: TimerSlot = Rc::new(RefCell::new(None));
            if let GateStart::ShowAfter(delay_ms) = start {
                arm(delay_ms, gate.clone(), slot.clone(), rerender);
            }

            move || {
                // Clean up the pending timer on unmount
                drop(slot.borrow_mut().take());
                if let Some(gate) = gate.borrow_mut().as_mut() {
                    gate.cancel();
                }
            }
        }, ());
    }

    let acknowledge = {
        let gate = gate.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(gate) = gate.borrow_mut().as_mut() {
                gate.acknowledge();
            }
            rerender.emit(());
        })
    };

    let visible = gate.borrow().as_ref().map_or(false, |gate| gate.is_visible());
    if !visible {
        return html! {};
    }

    html! {
        <div class="disclaimer-overlay" role="dialog" aria-modal="true" aria-labelledby="disclaimer-title">
            <style>
                {r#"
                .disclaimer-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    animation: disclaimerFade 0.3s ease-out;
                }
                .disclaimer-card {
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    width: 100%;
                    max-width: 32rem;
                    overflow: hidden;
                }
                .disclaimer-card .accent {
                    background: #0A2463;
                    height: 0.5rem;
                }
                .disclaimer-body {
                    padding: 1.5rem;
                }
                .disclaimer-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .disclaimer-head h2 {
                    font-family: Georgia, serif;
                    color: #0A2463;
                    margin: 0;
                }
                .disclaimer-close {
                    background: none;
                    border: none;
                    color: #6b7280;
                    font-size: 1.25rem;
                    cursor: pointer;
                }
                .disclaimer-accept {
                    display: block;
                    margin: 1.5rem auto 0;
                    background: #E6AF2E;
                    color: #0A2463;
                    font-weight: bold;
                    border: none;
                    border-radius: 6px;
                    padding: 0.6rem 1.5rem;
                    cursor: pointer;
                }
                @keyframes disclaimerFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
            <div class="disclaimer-card">
                <div class="accent"></div>
                <div class="disclaimer-body">
                    <div class="disclaimer-head">
                        <h2 id="disclaimer-title">{"Legal Disclaimer"}</h2>
                        <button class="disclaimer-close" aria-label="Close" onclick={acknowledge.clone()}>
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                    <p>{DISCLAIMER_TEXT}</p>
                    <button class="disclaimer-accept" onclick={acknowledge}>
                        {"I Understand"}
                    </button>
                </div>
            </div>
        </div>
    }
}
