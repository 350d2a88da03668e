//! Response JSON mapping helpers.

use serde_json::{Value, json};

use storefront_customers::Customer;
use storefront_orders::Order;
use storefront_products::Product;

pub fn customer_to_json(customer: &Customer) -> Value {
    json!({
        "id": customer.id,
        "customer_name": customer.customer_name,
        "email": customer.email,
        "phone": customer.phone,
    })
}

pub fn product_to_json(product: &Product) -> Value {
    json!({
        "id": product.id,
        "product_name": product.product_name,
        "price": product.price,
    })
}

/// Orders serialize with their resolved products nested.
pub fn order_to_json(order: &Order) -> Value {
    json!({
        "id": order.id,
        "order_date": order.order_date,
        "customer_id": order.customer_id,
        "products": order.products.iter().map(product_to_json).collect::<Vec<_>>(),
    })
}
