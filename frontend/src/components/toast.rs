use yew::prelude::*;

use crate::controller::{Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            {for props.toasts.iter().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast success",
                    ToastKind::Error => "toast error",
                };
                let onclick = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };
                html! {
                    <div key={toast.id} {class} {onclick} role="status">
                        {&toast.message}
                    </div>
                }
            })}
        </div>
    }
}
