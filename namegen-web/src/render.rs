//! HTML for the single form page.

use std::fmt::Write;

use namegen_core::{GenerationOutcome, NameCount};

use crate::form::FormInput;

/// One text input on the page.
struct TextField {
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
}

const TEXT_FIELDS: [TextField; 4] = [
    TextField {
        name: "business_type",
        label: "Type of Business",
        placeholder: "e.g., Coffee shop, Tech startup",
    },
    TextField {
        name: "target_audience",
        label: "Target Audience",
        placeholder: "e.g., Eco-conscious millennials, Pet lovers",
    },
    TextField {
        name: "branding_tone",
        label: "Branding Tone",
        placeholder: "e.g., Playful, Professional, Modern",
    },
    TextField {
        name: "keywords",
        label: "Keywords to Include (comma-separated)",
        placeholder: "e.g., green, eco, tech",
    },
];

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;display:flex;min-height:100vh}\
aside{width:16rem;background:#f0f2f6;padding:1.5rem}\
main{flex:1;max-width:44rem;padding:2rem 3rem}\
label{display:block;margin-top:1rem;font-weight:600}\
input[type=text]{width:100%;padding:.5rem;box-sizing:border-box}\
button{margin-top:1.5rem;padding:.6rem 1.2rem}\
.warning{background:#fffce7;padding:1rem}.error{background:#ffecec;padding:1rem}\
footer{margin-top:3rem;border-top:1px solid #ddd;padding-top:1rem;color:#555}";

/// Escapes text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Renders the complete page. `outcome` is `None` before the first submit.
#[must_use]
pub fn page(model: &str, input: &FormInput, outcome: Option<&GenerationOutcome>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<title>Business Name Generator</title><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body>");

    sidebar(&mut html, model);

    html.push_str("<main><h1>💡 Business Name Generator</h1>");
    html.push_str("<h3>Generate creative and relevant names for your business idea!</h3>");

    form(&mut html, input);

    if let Some(outcome) = outcome {
        result(&mut html, outcome);
    }

    let _ = write!(
        html,
        "<footer>Built with ❤️ in Rust on hyper, using {}.</footer></main></body></html>",
        escape_html(model)
    );
    html
}

fn sidebar(html: &mut String, model: &str) {
    let _ = write!(
        html,
        "<aside><h2>🤖 About the Model</h2><ul>\
         <li><strong>Model Used</strong>: {}</li>\
         <li><strong>Capabilities</strong>: Generates human-like text, perfect for creative tasks.</li>\
         <li><strong>Output Length</strong>: Names are concise, limited to {} words each.</li>\
         </ul></aside>",
        escape_html(model),
        namegen_core::MAX_WORDS,
    );
}

fn form(html: &mut String, input: &FormInput) {
    html.push_str("<h2>Enter Details About Your Business</h2>");
    html.push_str(
        "<form method=\"post\" action=\"/generate\" \
         onsubmit=\"var b=this.querySelector('button');b.disabled=true;b.textContent='Generating creative names...';\">",
    );

    let values = [
        &input.business_type,
        &input.target_audience,
        &input.branding_tone,
        &input.keywords,
    ];
    for (field, value) in TEXT_FIELDS.iter().zip(values) {
        let _ = write!(
            html,
            "<label for=\"{name}\">{label}</label>\
             <input type=\"text\" id=\"{name}\" name=\"{name}\" placeholder=\"{placeholder}\" value=\"{value}\">",
            name = field.name,
            label = field.label,
            placeholder = field.placeholder,
            value = escape_html(value),
        );
    }

    let count = input.num_names_or_default();
    let _ = write!(
        html,
        "<label for=\"num_names\">Number of Names to Generate: <output id=\"num_names_out\">{count}</output></label>\
         <input type=\"range\" id=\"num_names\" name=\"num_names\" min=\"{min}\" max=\"{max}\" value=\"{count}\" \
         oninput=\"document.getElementById('num_names_out').textContent=this.value\">",
        min = NameCount::MIN,
        max = NameCount::MAX,
    );

    html.push_str("<div><button type=\"submit\">Generate Business Names</button></div></form>");
}

fn result(html: &mut String, outcome: &GenerationOutcome) {
    match outcome {
        GenerationOutcome::Names(_) => {
            html.push_str("<section id=\"result\"><h2>Here are your business name ideas:</h2><ol>");
            for (_, name) in outcome.numbered() {
                let _ = write!(html, "<li>{}</li>", escape_html(name));
            }
            html.push_str("</ol></section>");
        }
        GenerationOutcome::NoResults => {
            html.push_str("<section id=\"result\"><h2>Here are your business name ideas:</h2>");
            notice(html, "warning", outcome);
            html.push_str("</section>");
        }
        GenerationOutcome::Invalid(_) | GenerationOutcome::Failed => {
            html.push_str("<section id=\"result\">");
            notice(html, "error", outcome);
            html.push_str("</section>");
        }
    }
}

fn notice(html: &mut String, class: &str, outcome: &GenerationOutcome) {
    if let Some(text) = outcome.notice() {
        let _ = write!(html, "<p class=\"{class}\" role=\"alert\">{}</p>", escape_html(text));
    }
}

#[cfg(test)]
mod tests {
    use namegen_core::{RequiredField, ValidationError};

    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn blank_page_has_every_input_and_no_result() {
        let html = page("gpt-3.5-turbo", &FormInput::default(), None);
        for field in &TEXT_FIELDS {
            assert!(html.contains(&format!("name=\"{}\"", field.name)));
        }
        assert!(html.contains("type=\"range\""));
        assert!(html.contains("min=\"1\" max=\"5\" value=\"3\""));
        assert!(html.contains("Model Used</strong>: gpt-3.5-turbo"));
        assert!(!html.contains("id=\"result\""));
    }

    #[test]
    fn names_render_as_ordered_list() {
        let outcome =
            GenerationOutcome::Names(vec!["Perk & Pine".to_owned(), "EcoBrew".to_owned()]);
        let html = page("m", &FormInput::default(), Some(&outcome));
        assert!(html.contains("<ol><li>Perk &amp; Pine</li><li>EcoBrew</li></ol>"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn submitted_values_are_echoed_escaped() {
        let input = FormInput {
            business_type: "<script>alert(1)</script>".to_owned(),
            num_names: "5".to_owned(),
            ..FormInput::default()
        };
        let html = page("m", &input, None);
        assert!(html.contains("value=\"&lt;script&gt;alert(1)&lt;/script&gt;\""));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("value=\"5\""));
    }

    #[test]
    fn outcomes_are_mutually_exclusive() {
        let missing = GenerationOutcome::Invalid(ValidationError::MissingFields(vec![
            RequiredField::BrandingTone,
        ]));
        let html = page("m", &FormInput::default(), Some(&missing));
        assert!(html.contains("Please fill in all required fields!"));
        assert!(!html.contains("<ol>"));
        assert!(!html.contains("No names were generated"));

        let html = page("m", &FormInput::default(), Some(&GenerationOutcome::NoResults));
        assert!(html.contains("class=\"warning\""));
        assert!(html.contains("No names were generated"));
        assert!(!html.contains("<ol>"));

        let html = page("m", &FormInput::default(), Some(&GenerationOutcome::Failed));
        assert!(html.contains("Something went wrong"));
        assert!(!html.contains("<ol>"));
    }
}
