//! Rendering for `fbl feedback list`.

use fbl_core::enums::RequestedResponse;
use fbl_view::{Cell, FeedbackTable, Pager, TagItem};
use serde::Serialize;
use tera::{Context, Tera};

use crate::cli::OutputFormat;
use crate::output::table::{self, Column, GridCell, Tone};
use crate::output::{TextView, render, table_options};

/// One page of the triage screen.
#[derive(Debug, Serialize)]
pub struct FeedbackListResponse {
    pub total: u64,
    pub per_page: u32,
    pub table: FeedbackTable,
    pub pager: Pager,
}

const FEEDBACK_TEMPLATE: &str = r#"<table id="{{ table.id }}" class="responsive-enabled">
  <thead>
    <tr>
{%- for header in table.headers %}
      <th{% if header.class is defined %} class="{{ header.class }}"{% endif %}>{{ header.label }}{% if header.sort_by is defined %}<span data-sort-by="{{ header.sort_by }}"></span>{% endif %}</th>
{%- endfor %}
    </tr>
  </thead>
  <tbody>
{%- if table.rows | length == 0 %}
    <tr class="odd"><td colspan="{{ table.headers | length }}" class="empty message">{% if table.empty.kind == "link" %}<a href="{{ table.empty.url }}">{{ table.empty.text }}</a>{% else %}{{ table.empty.text }}{% endif %}</td></tr>
{%- endif %}
{%- for row in table.rows %}
    <tr{% if row.kind == "survey_details" %} class="survey-results-row"{% endif %} data-feedback-id="{{ row.feedback_id }}">
{%- for cell in row.cells %}
{%- if cell.kind == "text" %}
      <td>{{ cell.text }}</td>
{%- elif cell.kind == "link" %}
      <td><a href="{{ cell.url }}">{{ cell.title }}</a></td>
{%- elif cell.kind == "feedback_text" %}
      <td class="survey-response"><span class="survey-text">{{ cell.text }}</span><span class="feedback-text-toggle">{{ cell.toggle }}</span></td>
{%- elif cell.kind == "requires_response" %}
      <td>{% if cell.response == "yes" %}<span class="feedback-bold">Yes</span>{% for line in cell.contact %}{{ line }}{% if not loop.last %}<br />{% endif %}{% endfor %}{% elif cell.response == "no" %}No{% else %}N/A{% endif %}</td>
{%- elif cell.kind == "survey" %}
      {% if cell.has_survey %}<td class="survey-yes"><span class="survey-toggle">Yes</span></td>{% else %}<td>No</td>{% endif %}
{%- elif cell.kind == "tags" %}
      <td><ul id="feedback-tags-list" class="{{ cell.list_class }}">
{%- for item in cell.items %}
        <li>{% if item.kind == "chip" %}<div class="button" id="{{ item.dom_id }}">{{ item.name }} <a class="link-open-modal-remove-tag use-ajax" data-dialog-type="modal" data-action="remove" data-comment-id="{{ item.remove.comment_id }}" data-tag-id="{{ item.remove.tag_id }}" data-tag-unique-id="{{ item.remove.tag_unique_id }}" title="Remove tag">Remove tag</a></div>{% else %}<span id="{{ item.dom_id }}">Not tagged</span>{% endif %}</li>
{%- endfor %}
      </ul></td>
{%- elif cell.kind == "add_tag" %}
      <td><a class="link-open-modal-add-tag use-ajax button" data-dialog-type="modal" data-action="add" data-comment-id="{{ cell.comment_id }}" title="Add tag">Add tag</a></td>
{%- elif cell.kind == "survey_details" %}
      <td colspan="{{ cell.colspan }}" class="survey-results-cell"><dl class="survey-results">
        {%- if cell.answers.helpful %}<dt>Helpful</dt><dd>{{ cell.answers.helpful }}</dd>{% endif %}
        {%- if cell.answers.easy %}<dt>Easy to use</dt><dd>{{ cell.answers.easy }}</dd>{% endif %}
        {%- if cell.answers.findable %}<dt>Confident</dt><dd>{{ cell.answers.findable }}</dd>{% endif %}
        {%- if cell.answers.reason %}<dt>Professional or personal</dt><dd>{{ cell.answers.reason }}</dd>{% endif %}
        {%- if cell.answers.email %}<dt>Email</dt><dd>{{ cell.answers.email }}</dd>{% endif %}
        {%- if cell.answers.purpose %}<dt>Visit purpose</dt><dd>{{ cell.answers.purpose }}</dd>{% endif %}
        {%- if cell.answers.other %}<dt>Other feedback</dt><dd>{{ cell.answers.other }}</dd>{% endif %}
      </dl></td>
{%- endif %}
{%- endfor %}
    </tr>
{%- endfor %}
  </tbody>
</table>
{%- if pager.links | length > 0 %}
<nav class="pager" role="navigation">
  <ul class="pager__items">
{%- set_global numbered = false %}
{%- for link in pager.links %}
{%- if link.item == "page" or link.item == "current" %}
{%- if not numbered and pager.ellipsis_before %}
    <li class="pager__item pager__item--ellipsis">&hellip;</li>
{%- endif %}
{%- set_global numbered = true %}
{%- elif link.item == "next" and pager.ellipsis_after %}
    <li class="pager__item pager__item--ellipsis">&hellip;</li>
{%- endif %}
    <li class="pager__item pager__item--{{ link.item }}{% if link.item == "current" %} is-active{% endif %}"><a href="{{ link.href }}">{{ link.label }}</a></li>
{%- endfor %}
  </ul>
</nav>
{%- endif %}
"#;

/// Render a feedback page in the requested format.
pub fn render_feedback(
    response: &FeedbackListResponse,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Html => render_html(response),
        OutputFormat::Table => Ok(render_text(response)),
        OutputFormat::Json | OutputFormat::Raw => render(response, format),
    }
}

/// Print a feedback page in the requested format.
pub fn output_feedback(
    response: &FeedbackListResponse,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let rendered = render_feedback(response, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_html(response: &FeedbackListResponse) -> anyhow::Result<String> {
    let context = Context::from_serialize(response)?;
    Ok(Tera::one_off(FEEDBACK_TEMPLATE, &context, true)?)
}

fn render_text(response: &FeedbackListResponse) -> String {
    if response.table.is_empty() {
        return response.table.empty.text().to_string();
    }
    let rendered = table::render_grid(&response.columns(), &response.rows(), table_options());
    format!("{rendered}\n\n{}", pager_summary(response))
}

/// Survey details rows and the Add Tag column have no text form.
impl TextView for FeedbackListResponse {
    fn columns(&self) -> Vec<Column> {
        let mut columns = vec![Column::new("id").numeric()];
        columns.extend(
            self.table
                .headers
                .iter()
                .filter(|header| !header.label.is_empty())
                .map(|header| {
                    let column = Column::new(header.label);
                    if header.class.is_some() {
                        column.wide()
                    } else {
                        column
                    }
                }),
        );
        columns
    }

    fn rows(&self) -> Vec<Vec<GridCell>> {
        self.table
            .feedback_rows()
            .map(|row| {
                let mut cells = vec![GridCell::plain(row.feedback_id.to_string())];
                cells.extend(
                    row.cells
                        .iter()
                        .filter(|cell| !matches!(cell, Cell::AddTag { .. }))
                        .map(|cell| GridCell::toned(cell.plain_text(), tone(cell))),
                );
                cells
            })
            .collect()
    }
}

fn tone(cell: &Cell) -> Tone {
    match cell {
        Cell::RequiresResponse { response, .. } => match response {
            RequestedResponse::Yes => Tone::Positive,
            RequestedResponse::No => Tone::Negative,
            RequestedResponse::NotApplicable => Tone::Muted,
        },
        Cell::Survey { has_survey: true } => Tone::Positive,
        Cell::Tags { items, .. }
            if items
                .iter()
                .all(|item| matches!(item, TagItem::NotTagged { .. })) =>
        {
            Tone::Muted
        }
        _ => Tone::Plain,
    }
}

fn pager_summary(response: &FeedbackListResponse) -> String {
    let pages = response.pager.total_pages.max(1);
    format!(
        "page {} of {pages} ({} total)",
        response.pager.current_page + 1,
        response.total
    )
}
