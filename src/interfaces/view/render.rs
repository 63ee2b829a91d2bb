use std::fmt::Write;

use ammonia::clean_text;

use crate::{
    entities::job_posting::{JobField, JobPosting, JobType},
    view::state::ViewState,
};

pub const PAGE_PATH: &str = "/jobs/new";

/// Renders the job requirements form and the existing listings as an HTML page.
pub fn render_page(state: &ViewState) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Create New Job</title>\n</head>\n<body>\n");
    html.push_str("<main class=\"flex flex-col justify-center items-center mt-20\">\n");
    html.push_str("<h1 class=\"text-xl font-bold\">Job Requirements</h1>\n");
    html.push_str("<p>Please enter job requirements.</p>\n");

    if let Some(error) = &state.error {
        let _ = writeln!(html, "<p class=\"text-red-500\" role=\"alert\">{}</p>", clean_text(error));
    }

    render_form(&mut html, state);

    if state.loading {
        html.push_str("<p>Loading jobs...</p>\n");
    } else {
        render_listing(&mut html, &state.postings);
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, state: &ViewState) {
    let _ = writeln!(html, "<form class=\"card bg-base-100 w-96 shadow-xl gap-2\" method=\"post\" action=\"{}\">", PAGE_PATH);

    for field in JobField::ALL {
        let value = clean_text(state.form.get(field));
        match field {
            JobField::OtherRequirements => {
                let _ = writeln!(
                    html,
                    "<textarea class=\"textarea\" name=\"{}\" placeholder=\"{}\">{}</textarea>",
                    field.key(), field.placeholder(), value
                );
            }
            JobField::JobType => render_job_type_select(html, state.form.get(field)),
            _ => {
                let _ = writeln!(
                    html,
                    "<label class=\"input input-bordered flex items-center gap-2\">\
                     <input type=\"text\" class=\"grow\" name=\"{}\" placeholder=\"{}\" value=\"{}\"></label>",
                    field.key(), field.placeholder(), value
                );
            }
        }
    }

    html.push_str("<button class=\"btn btn-primary\" type=\"submit\">Create New Job</button>\n");
    html.push_str("</form>\n");
}

// The placeholder is selected while no type is chosen and is never submitted.
fn render_job_type_select(html: &mut String, current: &str) {
    let _ = writeln!(html, "<select class=\"select select-bordered w-full\" name=\"{}\">", JobField::JobType.key());

    let placeholder_selected = if JobType::parse(current).is_none() { " selected" } else { "" };
    let _ = writeln!(html, "<option value=\"\" disabled{}>Job Type</option>", placeholder_selected);

    for job_type in JobType::ALL {
        let selected = if job_type.as_str() == current { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            job_type.as_str(), selected, job_type.label()
        );
    }

    html.push_str("</select>\n");
}

fn render_listing(html: &mut String, postings: &[JobPosting]) {
    html.push_str("<div>\n<h2 class=\"text-xl mt-10\">Existing Job Listings</h2>\n");
    html.push_str("<ul class=\"list-disc pl-5\">\n");

    for posting in postings {
        let text = |value: &Option<String>| clean_text(JobPosting::text(value));
        let _ = writeln!(
            html,
            "<li class=\"mt-2\">\
             <h3 class=\"text-lg font-semibold\">{}</h3>\
             <p>{}</p>\
             <p>Qualification: {}</p>\
             <p>Salary: {}</p>\
             <p>Location: {}</p>\
             <p>Job Type: {}</p>\
             </li>",
            text(&posting.job_title),
            text(&posting.job_description),
            text(&posting.qualification),
            text(&posting.salary_range),
            text(&posting.address),
            text(&posting.job_type),
        );
    }

    html.push_str("</ul>\n</div>\n");
}
