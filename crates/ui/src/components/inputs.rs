//! # Input Components
//!
//! Form inputs for the clinic forms:
//! - **TextField**: single-line input (text, tel, date, datetime-local)
//! - **TextAreaField**: multi-line input
//! - **SelectField**: dropdown with a placeholder option
//! - **FormActions**: submit and cancel buttons
//!
//! Every field shows its error message, when it has one, right under the
//! input and switches to the error border.

use dioxus::prelude::*;

// ============================================================================
// Text Field
// ============================================================================

/// Properties for TextField component
#[derive(Props, Clone, PartialEq)]
pub struct TextFieldProps {
    /// Input value
    pub value: String,

    /// Label text
    pub label: String,

    /// Input type (text, tel, date, datetime-local)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Change handler
    pub on_change: EventHandler<String>,
}

/// Single-line labelled input
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let input_class = build_input_class(props.error.is_some());

    rsx! {
        div {
            class: "input-group",

            label {
                class: "block text-sm font-medium text-slate-300 mb-1.5",
                "{props.label}"
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.on_change.call(e.value()),
            }

            FieldError { error: props.error.clone() }
        }
    }
}

// ============================================================================
// Text Area Field
// ============================================================================

/// Properties for TextAreaField component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaFieldProps {
    pub value: String,
    pub label: String,

    /// Visible rows
    #[props(default = 3)]
    pub rows: u32,

    #[props(default)]
    pub error: Option<String>,

    pub on_change: EventHandler<String>,
}

/// Multi-line labelled input
#[component]
pub fn TextAreaField(props: TextAreaFieldProps) -> Element {
    let input_class = build_input_class(props.error.is_some());

    rsx! {
        div {
            class: "input-group",

            label {
                class: "block text-sm font-medium text-slate-300 mb-1.5",
                "{props.label}"
            }

            textarea {
                class: "{input_class} resize-y",
                rows: "{props.rows}",
                value: "{props.value}",
                oninput: move |e| props.on_change.call(e.value()),
            }

            FieldError { error: props.error.clone() }
        }
    }
}

// ============================================================================
// Select Field
// ============================================================================

/// A single option for the SelectField component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for SelectField component
#[derive(Props, Clone, PartialEq)]
pub struct SelectFieldProps {
    /// Selected value; empty selects the placeholder
    pub value: String,

    pub label: String,

    /// Text of the empty option
    pub placeholder: String,

    pub options: Vec<SelectOption>,

    #[props(default)]
    pub error: Option<String>,

    pub on_change: EventHandler<String>,
}

/// Dropdown with an empty placeholder option first
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let input_class = build_input_class(props.error.is_some());

    rsx! {
        div {
            class: "input-group",

            label {
                class: "block text-sm font-medium text-slate-300 mb-1.5",
                "{props.label}"
            }

            select {
                class: "{input_class} cursor-pointer",
                onchange: move |e| props.on_change.call(e.value()),

                option {
                    value: "",
                    selected: props.value.is_empty(),
                    "{props.placeholder}"
                }

                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.label}"
                    }
                }
            }

            FieldError { error: props.error.clone() }
        }
    }
}

// ============================================================================
// Form Actions
// ============================================================================

/// Label of the submit button
pub fn submit_label(editing: bool) -> &'static str {
    if editing { "Actualizar" } else { "Crear" }
}

/// Submit and cancel buttons
#[component]
pub fn FormActions(editing: bool, on_cancel: EventHandler<()>) -> Element {
    let label = submit_label(editing);

    rsx! {
        div {
            class: "form-actions flex gap-2 pt-2",

            button {
                class: "btn btn-primary",
                r#type: "submit",
                "{label}"
            }

            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_cancel.call(()),
                "Cancelar"
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

#[component]
fn FieldError(error: Option<String>) -> Element {
    rsx! {
        if let Some(message) = error {
            p { class: "field-error mt-1 text-xs text-rose-400", "{message}" }
        }
    }
}

fn build_input_class(has_error: bool) -> String {
    let mut classes = vec![
        "w-full",
        "px-3",
        "py-2",
        "bg-slate-800",
        "border",
        "rounded-lg",
        "text-sm",
        "text-slate-100",
        "focus:outline-none",
        "focus:ring-2",
    ];

    if has_error {
        classes.push("border-rose-500");
        classes.push("focus:ring-rose-500/30");
    } else {
        classes.push("border-slate-700");
        classes.push("focus:ring-indigo-500/30");
    }

    classes.join(" ")
}
