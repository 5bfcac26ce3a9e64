use crate::structs::user_response::UserResponse;

/// Render one user's responses as an aligned table: food, category,
/// frequency, notes.
pub fn render_user_table(dni: &str, records: &[UserResponse]) -> String {
    if records.is_empty() {
        return format!("No responses to show for DNI: {}\n", dni);
    }

    let headers = ["Food", "Category", "Frequency", "Notes"];
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for record in records {
        widths[0] = widths[0].max(record.food.chars().count());
        widths[1] = widths[1].max(record.category.chars().count());
        widths[2] = widths[2].max(record.frequency.as_str().chars().count());
        widths[3] = widths[3].max(record.notes.chars().count());
    }

    let mut out = format!("Responses for DNI: {} ({} items)\n", dni, records.len());
    out.push_str(&format!(
        "  {:<w0$}  {:<w1$}  {:<w2$}  {:<w3$}\n",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    ));
    out.push_str(&format!(
        "  {}  {}  {}  {}\n",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2]),
        "-".repeat(widths[3]),
    ));
    for record in records {
        out.push_str(&format!(
            "  {:<w0$}  {:<w1$}  {:<w2$}  {:<w3$}\n",
            record.food,
            record.category,
            record.frequency.as_str(),
            record.notes,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        ));
    }
    out
}
