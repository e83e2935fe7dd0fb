use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::state::contact_form::Acknowledgment;

pub const TOAST_LIMIT: usize = 3;
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

#[derive(Debug, PartialEq)]
pub enum ToastAction {
    Push(Acknowledgment),
    Dismiss(u32),
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(ack) => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    title: ack.title,
                    description: ack.description,
                });
                next.next_id = next.next_id.wrapping_add(1);
                if next.toasts.len() > TOAST_LIMIT {
                    let overflow = next.toasts.len() - TOAST_LIMIT;
                    next.toasts.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => next.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class="toast" role="status">
            <div class="toast-body">
                <div class="toast-title">{props.toast.title}</div>
                <div class="toast-description">{props.toast.description}</div>
            </div>
            <button class="toast-close" aria-label="Close" onclick={close}>{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 100;
                        max-width: 380px;
                        width: calc(100% - 3rem);
                    }
                    @keyframes toastIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1rem 1.25rem;
                        border-radius: 10px;
                        background: var(--surface-bg);
                        color: var(--text);
                        border: 1px solid var(--border);
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                        animation: toastIn 0.3s ease-out forwards;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.9rem;
                        color: var(--muted-text);
                    }
                    .toast-close {
                        background: none;
                        border: none;
                        color: var(--muted-text);
                        font-size: 1.25rem;
                        cursor: pointer;
                        line-height: 1;
                    }
                "#}
            </style>
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id}
                    toast={toast.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(stack: Rc<ToastStack>) -> Rc<ToastStack> {
        stack.reduce(ToastAction::Push(Acknowledgment::message_sent()))
    }

    #[test]
    fn each_push_adds_one_toast() {
        let stack = push(Rc::new(ToastStack::default()));
        assert_eq!(stack.toasts.len(), 1);
        assert_eq!(stack.toasts[0].title, "Message Sent!");

        let stack = push(stack);
        assert_eq!(stack.toasts.len(), 2);
        assert_ne!(stack.toasts[0].id, stack.toasts[1].id);
    }

    #[test]
    fn oldest_toasts_fall_off() {
        let mut stack = Rc::new(ToastStack::default());
        for _ in 0..TOAST_LIMIT + 2 {
            stack = push(stack);
        }
        assert_eq!(stack.toasts.len(), TOAST_LIMIT);
        assert_eq!(stack.toasts[0].id, 2);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let stack = push(push(Rc::new(ToastStack::default())));
        let first = stack.toasts[0].id;
        let stack = stack.reduce(ToastAction::Dismiss(first));
        assert_eq!(stack.toasts.len(), 1);
        assert_ne!(stack.toasts[0].id, first);

        let stack = stack.reduce(ToastAction::Dismiss(999));
        assert_eq!(stack.toasts.len(), 1);
    }
}
