//! Template registry. Pages are embedded at compile time so the binary is
//! self-contained.

use tera::Tera;

pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        (
            "macros/forms.html",
            include_str!("../../templates/macros/forms.html"),
        ),
        ("index.html", include_str!("../../templates/index.html")),
        (
            "support/add_reclamation.html",
            include_str!("../../templates/support/add_reclamation.html"),
        ),
        (
            "support/contact.html",
            include_str!("../../templates/support/contact.html"),
        ),
        (
            "support/reclamation_list.html",
            include_str!("../../templates/support/reclamation_list.html"),
        ),
        (
            "catalog/add_product.html",
            include_str!("../../templates/catalog/add_product.html"),
        ),
        (
            "catalog/product_list.html",
            include_str!("../../templates/catalog/product_list.html"),
        ),
    ])?;
    Ok(tera)
}
