// ============================================================================
// DATA PREVIEW - parsed salary rows returned by the upload
// ============================================================================

use yew::prelude::*;

use super::DataSummary;
use crate::models::{SalaryRecord, UploadDetails};
use crate::utils::{format_currency, month_label};
use crate::views::shared::{ColumnDef, DataTable, HideBelow, TableRow};

impl TableRow for SalaryRecord {
    fn key(&self) -> String {
        self.employee_id.clone()
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("Employee ID"),
            ColumnDef::new("Name"),
            ColumnDef::new("Department").hide_below(HideBelow::Md),
            ColumnDef::new("Position").hide_below(HideBelow::Lg),
            ColumnDef::new("Basic Salary").right(),
            ColumnDef::new("Allowances").right().hide_below(HideBelow::Sm),
            ColumnDef::new("Deductions").right().hide_below(HideBelow::Sm),
            ColumnDef::new("Net Salary").right(),
        ]
    }

    fn cell(&self, index: usize) -> Html {
        let text = match index {
            0 => self.employee_id.clone(),
            1 => self.name.clone(),
            2 => self.department.clone(),
            3 => self.position.clone(),
            4 => format_currency(self.basic_salary),
            5 => format_currency(self.allowances),
            6 => format_currency(self.deductions),
            7 => return html! { <strong>{ format_currency(self.net_salary) }</strong> },
            _ => String::new(),
        };
        html! { <>{ text }</> }
    }
}

#[derive(Properties, PartialEq)]
pub struct DataPreviewProps {
    pub details: UploadDetails,
    pub sending: bool,
    pub sent: bool,
    pub on_back: Callback<MouseEvent>,
    pub on_generate: Callback<()>,
}

#[function_component(DataPreview)]
pub fn data_preview(props: &DataPreviewProps) -> Html {
    let d = &props.details;
    let generate_label = if props.sending {
        "Sending..."
    } else if props.sent {
        "Salary Slips Sent"
    } else {
        "Generate Salary Slips"
    };

    html! {
        <div class="stack">
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Data Preview"}</h2>
                    <div class="badges">
                        <span class="badge badge-outline">{ format!("{} {}", month_label(&d.month), d.year) }</span>
                        <span class="badge badge-outline">{"All Departments"}</span>
                        <span class="badge badge-outline">{ format!("{} Employees", d.employee_count()) }</span>
                    </div>
                </div>
                <DataTable<SalaryRecord>
                    rows={d.salary_records.clone()}
                    empty_message="No salary records were found in this file."
                />
                <div class="card-footer space-between">
                    <button class="btn btn-outline" onclick={props.on_back.clone()} disabled={props.sending}>
                        {"Back to Upload"}
                    </button>
                    <button
                        class="btn btn-primary"
                        onclick={props.on_generate.reform(|_: MouseEvent| ())}
                        disabled={props.sending || props.sent}
                    >
                        { generate_label }
                    </button>
                </div>
            </div>
            <DataSummary details={d.clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_columns_line_up_with_cells() {
        let columns = SalaryRecord::columns();
        assert_eq!(columns.len(), 8);
        assert_eq!(columns[7].header, "Net Salary");
        assert_eq!(columns[7].class().to_string(), "text-right");
        assert_eq!(columns[2].class().to_string(), "hide-below-md");
    }
}
