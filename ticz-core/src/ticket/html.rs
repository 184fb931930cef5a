use super::TicketCard;
use crate::event::tier_for;

pub fn render_html(card: &TicketCard) -> String {
    let photo = match &card.photo {
        Some(photo) => format!(
            "<img src=\"{}\" alt=\"Profile\" style=\"max-width: 300px;\">",
            photo.data_url()
        ),
        None => "<p>Not uploaded</p>".to_string(),
    };

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{} Ticket</title>\n", escape(card.event.name)));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("  <h2>{} Ticket</h2>\n", escape(card.event.name)));
    push_row(&mut out, "Event Date", card.event.date);
    push_row(&mut out, "Location", card.event.location);
    push_row(&mut out, "Ticket Type", card.ticket_type.label());
    push_row(&mut out, "Price", tier_for(card.ticket_type).price);
    push_row(&mut out, "Number of Tickets", &card.ticket_count.to_string());
    push_row(&mut out, "Name", &card.attendee_name);
    push_row(&mut out, "Email", &card.attendee_email);
    push_row(&mut out, "Special Request", card.special_request_or_nil());
    out.push_str("  <p>Profile Photo:</p>\n");
    out.push_str(&format!("  {}\n", photo));
    out.push_str("  <p>Thank you for booking! Enjoy the event!</p>\n");
    out.push_str("</body>\n</html>\n");
    out
}

fn push_row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  <p>{}: {}</p>\n", label, escape(value)));
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
