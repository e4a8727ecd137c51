use yew::prelude::*;

use crate::config::CONFIG;

#[function_component(Guidelines)]
pub fn guidelines() -> Html {
    let upload = &CONFIG.upload;

    html! {
        <aside class="card guidelines">
            <div class="card-header">
                <h2 class="card-title">{"ℹ️ Upload Guidelines"}</h2>
            </div>
            <div class="card-content stack">
                <div class="panel">
                    <h3>{"File Requirements"}</h3>
                    <ul>
                        <li>{ format!("Use Excel or CSV files ({})", upload.accept_attr().replace(',', ", ")) }</li>
                        <li>{ format!("Maximum file size: {}MB", upload.max_size_mb) }</li>
                        <li>{"First row should contain column headers"}</li>
                        <li>{"Required columns: Employee ID, Name, Department, Position, Basic Salary, Allowances, Deductions"}</li>
                        <li>{"Employee IDs must be unique"}</li>
                        <li>{"Numeric values should not contain currency symbols"}</li>
                    </ul>
                </div>
                <div class="panel">
                    <h3>{"Processing Information"}</h3>
                    <ul>
                        <li>{"A salary slip is generated for every employee in the file"}</li>
                        <li>{"Net salary is basic salary plus allowances minus deductions"}</li>
                        <li>{"You can preview the data before sending any slips"}</li>
                    </ul>
                </div>
                <div class="alert">
                    <div class="alert-title">{"Need help?"}</div>
                    <div class="alert-description">
                        {"Download the "}
                        <a href={CONFIG.template_sheet_url.clone()} target="_blank" rel="noopener noreferrer">
                            {"sample template"}
                        </a>
                        {" to make sure your data is formatted correctly."}
                    </div>
                </div>
            </div>
        </aside>
    }
}
