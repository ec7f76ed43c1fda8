use leptos::{either::Either, prelude::*};

use crate::form::{FormMachine, FormSchema, SelectOption};

const CONTROL_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-background border border-border focus:outline-none focus:ring-2 focus:ring-primary/50 focus:border-primary transition-colors";
const INVALID_CLASS: &str = "border-destructive focus:ring-destructive/50";

fn control_class(error: Option<&str>, extra: &str) -> String {
    let mut class = format!("{CONTROL_CLASS} {extra}");
    if error.is_some() {
        class.push(' ');
        class.push_str(INVALID_CLASS);
    }
    class
}

/// Reactive value, error and input handler for one field.
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub value: Signal<String>,
    pub error: Signal<Option<&'static str>>,
    pub on_input: Callback<String>,
}

pub fn bind<S: FormSchema>(machine: RwSignal<FormMachine<S>>, field: S::Field) -> FieldBinding {
    FieldBinding {
        value: Signal::derive(move || machine.with(|m| m.value(field).to_string())),
        error: Signal::derive(move || machine.with(|m| m.error(field))),
        on_input: Callback::new(move |value: String| machine.update(|m| m.update(field, value))),
    }
}

#[component]
fn FieldLabel(id: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <label for=id class="block text-sm font-medium">
            {label}
            " "
            <span class="text-destructive">"*"</span>
        </label>
    }
}

#[component]
fn FieldError(error: Signal<Option<&'static str>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|msg| {
                view! {
                    <p class="text-sm text-destructive flex items-center gap-1">
                        <span aria-hidden="true">"⚠"</span>
                        {msg}
                    </p>
                }
            })
    }
}

#[component]
pub fn TextField(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    binding: FieldBinding,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let FieldBinding {
        value,
        error,
        on_input,
    } = binding;
    view! {
        <div class="space-y-2">
            <FieldLabel id label />
            <input
                type=input_type
                id=id
                name=name
                placeholder=placeholder
                class=move || control_class(error.get(), "")
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    binding: FieldBinding,
    #[prop(default = 5)] rows: u32,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let FieldBinding {
        value,
        error,
        on_input,
    } = binding;
    view! {
        <div class=if wide { "space-y-2 md:col-span-2" } else { "space-y-2" }>
            <FieldLabel id label />
            <textarea
                id=id
                name=name
                rows=rows
                placeholder=placeholder
                class=move || control_class(error.get(), "resize-none")
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            <FieldError error />
        </div>
    }
}

#[component]
pub fn SelectField(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    options: &'static [SelectOption],
    binding: FieldBinding,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let FieldBinding {
        value,
        error,
        on_input,
    } = binding;
    view! {
        <div class=if wide { "space-y-2 md:col-span-2" } else { "space-y-2" }>
            <FieldLabel id label />
            <select
                id=id
                name=name
                class=move || control_class(error.get(), "appearance-none cursor-pointer")
                prop:value=value
                on:change=move |ev| on_input.run(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|opt| {
                        view! {
                            <option value=opt.value selected=move || value.get() == opt.value>
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldError error />
        </div>
    }
}

/// Disabled with a spinner while a submission is in flight.
#[component]
pub fn SubmitButton(
    busy: Signal<bool>,
    label: &'static str,
    busy_label: &'static str,
    #[prop(optional)] extra_class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=format!("btn-hero w-full {extra_class}")
            disabled=move || busy.get()
        >
            {move || {
                if busy.get() {
                    Either::Left(
                        view! {
                            <span class="spinner" aria-hidden="true"></span>
                            {busy_label}
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            {label}
                            <span aria-hidden="true">" ➤"</span>
                        },
                    )
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_class() {
        assert!(!control_class(None, "").contains(INVALID_CLASS));
        let class = control_class(Some("Name is required"), "resize-none");
        assert!(class.contains("resize-none"));
        assert!(class.ends_with(INVALID_CLASS));
    }
}
