// ============================================================================
// DATA TABLE - one table component for every row type
// ============================================================================
// Rows describe their own columns through `TableRow`; the table only knows
// about headers, alignment and responsive hiding.
// ============================================================================

use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Align {
    Left,
    Right,
}

/// Breakpoint below which a column is hidden
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HideBelow {
    Sm,
    Md,
    Lg,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ColumnDef {
    pub header: &'static str,
    pub align: Align,
    pub hide_below: Option<HideBelow>,
}

impl ColumnDef {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            align: Align::Left,
            hide_below: None,
        }
    }

    pub const fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub const fn hide_below(mut self, breakpoint: HideBelow) -> Self {
        self.hide_below = Some(breakpoint);
        self
    }

    pub fn class(&self) -> Classes {
        let mut classes = classes!();
        if self.align == Align::Right {
            classes.push("text-right");
        }
        match self.hide_below {
            Some(HideBelow::Sm) => classes.push("hide-below-sm"),
            Some(HideBelow::Md) => classes.push("hide-below-md"),
            Some(HideBelow::Lg) => classes.push("hide-below-lg"),
            None => {}
        }
        classes
    }
}

pub trait TableRow: Clone + PartialEq + 'static {
    fn key(&self) -> String;
    fn columns() -> Vec<ColumnDef>;
    /// Content of column `index`, in `columns()` order
    fn cell(&self, index: usize) -> Html;
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<R: TableRow> {
    pub rows: Vec<R>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or(AttrValue::from("No results found."))]
    pub empty_message: AttrValue,
    /// Renders the trailing "Actions" cell when set
    #[prop_or_default]
    pub actions: Option<Callback<R, Html>>,
    /// Key of the row whose `expansion` is shown under it
    #[prop_or_default]
    pub expanded: Option<String>,
    #[prop_or_default]
    pub expansion: Option<Callback<R, Html>>,
}

/// One data row plus its expansion, keyed by `TableRow::key`
fn render_row<R: TableRow>(row: &R, columns: &[ColumnDef], props: &DataTableProps<R>, span: &str) -> Html {
    let key = row.key();
    let expanded = props.expanded.as_deref() == Some(key.as_str());
    html! {
        <key={key.clone()}>
            <tr>
                { for columns.iter().enumerate().map(|(i, col)| html! {
                    <td class={col.class()}>{ row.cell(i) }</td>
                }) }
                if let Some(actions) = &props.actions {
                    <td class="text-right">{ actions.emit(row.clone()) }</td>
                }
            </tr>
            if let (true, Some(expansion)) = (expanded, &props.expansion) {
                <tr class="row-details">
                    <td colspan={span.to_string()}>{ expansion.emit(row.clone()) }</td>
                </tr>
            }
        </>
    }
}

#[function_component(DataTable)]
pub fn data_table<R: TableRow>(props: &DataTableProps<R>) -> Html {
    let columns = R::columns();
    let span = (columns.len() + usize::from(props.actions.is_some())).to_string();

    let body = if props.loading {
        html! {
            { for (0..3).map(|i| html! {
                <tr key={i.to_string()} class="skeleton-row">
                    <td colspan={span.clone()}><div class="skeleton skeleton-line"></div></td>
                </tr>
            }) }
        }
    } else if props.rows.is_empty() {
        html! {
            <tr>
                <td colspan={span.clone()} class="table-empty">{ props.empty_message.clone() }</td>
            </tr>
        }
    } else {
        html! {
            { for props.rows.iter().map(|row| render_row(row, &columns, props, &span)) }
        }
    };

    html! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        { for columns.iter().map(|col| html! {
                            <th class={col.class()}>{ col.header }</th>
                        }) }
                        if props.actions.is_some() {
                            <th class="text-right">{"Actions"}</th>
                        }
                    </tr>
                </thead>
                <tbody>{ body }</tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::{Key, VNode};

    #[derive(Clone, PartialEq)]
    struct Row(&'static str);

    impl TableRow for Row {
        fn key(&self) -> String {
            self.0.to_string()
        }

        fn columns() -> Vec<ColumnDef> {
            vec![ColumnDef::new("ID")]
        }

        fn cell(&self, _index: usize) -> Html {
            html! { { self.0 } }
        }
    }

    fn props(expanded: Option<&str>) -> DataTableProps<Row> {
        DataTableProps {
            rows: vec![Row("A1"), Row("B2")],
            loading: false,
            empty_message: AttrValue::from("No results found."),
            actions: None,
            expanded: expanded.map(str::to_string),
            expansion: Some(Callback::from(|_: Row| html! { "details" })),
        }
    }

    fn key_of(node: &Html) -> Option<Key> {
        match node {
            VNode::VList(list) => list.key.clone(),
            _ => None,
        }
    }

    #[test]
    fn rows_are_keyed_fragments() {
        let props = props(Some("B2"));
        let columns = Row::columns();
        for row in &props.rows {
            let node = render_row(row, &columns, &props, "1");
            assert_eq!(key_of(&node), Some(Key::from(row.key())));
        }
    }

    #[test]
    fn column_classes() {
        let col = ColumnDef::new("Net Salary").right();
        assert_eq!(col.class().to_string(), "text-right");

        let col = ColumnDef::new("Department").hide_below(HideBelow::Md);
        assert_eq!(col.class().to_string(), "hide-below-md");

        assert!(ColumnDef::new("ID").class().is_empty());
    }
}
