//! Hand-written entities in exactly the shape the generation units emit.
//! They exercise the full runtime contract: scalar coercion, reference
//! denormalization, collection back-reference sync, cycle-safe export, and
//! lenient ingest.

#![allow(dead_code)]

use stratum_runtime::prelude::*;

///
/// CustomerStatus
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CustomerStatus {
    Gold,
    Basic,
}

impl EnumValue for CustomerStatus {
    fn as_value(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Basic => "basic",
        }
    }

    fn from_value(value: &str) -> Option<Self> {
        match value {
            "gold" => Some(Self::Gold),
            "basic" => Some(Self::Basic),
            _ => None,
        }
    }
}

///
/// Address
/// Embedded value object: serializes through its own tree, fresh detector.
///

#[derive(Debug, Default)]
pub struct Address {
    street: Option<String>,
    city: Option<String>,
}

impl Address {
    pub const TABLE_NAME: &'static str = "ADDRESS";
    pub const COLUMN_STREET: &'static str = "STREET";
    pub const COLUMN_CITY: &'static str = "CITY";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_street(&self) -> Option<String> {
        self.street.clone()
    }

    pub fn set_street(&mut self, value: Option<String>) {
        self.street = value;
    }

    pub fn get_city(&self) -> Option<String> {
        self.city.clone()
    }

    pub fn set_city(&mut self, value: Option<String>) {
        self.city = value;
    }
}

impl TreeSerialize for Address {
    fn to_tree_with(&self, detector: &mut CycleDetector) -> Tree {
        if !detector.can_proceed(ObjectIdentity::of(self)) {
            return Tree::Null;
        }
        let mut data = TreeMap::new();
        data.insert("street", Tree::from(self.street.clone()));
        data.insert("city", Tree::from(self.city.clone()));
        Tree::Map(data)
    }
}

impl TreeDeserialize for Address {
    fn from_tree(this: &Shared<Self>, data: &TreeMap) {
        let mut entity = this.borrow_mut();
        entity.set_street(data.get_text("street"));
        entity.set_city(data.get_text("city"));
    }
}

///
/// Customer
///

#[derive(Debug, Default)]
pub struct Customer {
    id: Option<i64>,
    name: Option<String>,
    status: Option<CustomerStatus>,
    birthday: Option<Date>,
    address: Option<Shared<Address>>,
    orders: Option<Vec<Shared<Order>>>,
}

impl Customer {
    pub const TABLE_NAME: &'static str = "CUSTOMER";
    pub const COLUMN_ID: &'static str = "ID";
    pub const COLUMN_NAME: &'static str = "NAME";
    pub const COLUMN_STATUS: &'static str = "STATUS";
    pub const COLUMN_BIRTHDAY: &'static str = "BIRTHDAY";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_id(&self) -> Option<i64> {
        self.id
    }

    pub fn set_id(&mut self, value: Option<i64>) {
        self.id = value;
    }

    pub fn get_name(&self) -> Option<String> {
        self.name.clone()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn get_status(&self) -> Option<CustomerStatus> {
        self.status
    }

    pub fn set_status(&mut self, value: Option<CustomerStatus>) {
        self.status = value;
    }

    pub fn set_status_from_value(&mut self, value: Option<&str>) {
        self.status = value.and_then(CustomerStatus::from_value);
    }

    pub fn is_status_gold(&self) -> bool {
        self.status == Some(CustomerStatus::Gold)
    }

    pub fn get_birthday(&self) -> Option<Date> {
        self.birthday
    }

    pub fn set_birthday(&mut self, value: Option<Date>) {
        self.birthday = value;
    }

    pub fn get_address(&self) -> Option<Shared<Address>> {
        self.address.clone()
    }

    pub fn set_address(&mut self, value: Option<Shared<Address>>) {
        self.address = value;
    }

    pub fn get_orders(&self) -> &[Shared<Order>] {
        self.orders.as_deref().unwrap_or_default()
    }

    pub fn add_to_orders(this: &Shared<Self>, child: Shared<Order>) {
        child.borrow_mut().set_customer(Some(Shared::clone(this)));
        this.borrow_mut()
            .orders
            .get_or_insert_with(Vec::new)
            .push(child);
    }

    pub fn generate_primary_key(&mut self, provider: &mut dyn SequenceProvider) {
        if self.id.is_none() {
            self.id = Some(provider.next_value("customer_seq"));
        }
    }
}

impl TreeSerialize for Customer {
    fn to_tree_with(&self, detector: &mut CycleDetector) -> Tree {
        if !detector.can_proceed(ObjectIdentity::of(self)) {
            return Tree::Null;
        }
        let mut data = TreeMap::new();
        data.insert("id", Tree::from(self.id));
        data.insert("name", Tree::from(self.name.clone()));
        data.insert(
            "status",
            self.status.map_or(Tree::Null, |v| Tree::from(v.as_value())),
        );
        data.insert(
            "birthday",
            self.birthday.map_or(Tree::Null, |v| Tree::from(v.to_string())),
        );
        data.insert(
            "address",
            self.address
                .as_ref()
                .map_or(Tree::Null, |value| value.borrow().to_tree()),
        );
        let mut orders = Vec::new();
        for child in self.orders.as_deref().unwrap_or_default() {
            orders.push(child.borrow().to_tree_with(detector));
        }
        data.insert("orders", Tree::List(orders));
        Tree::Map(data)
    }
}

impl TreeDeserialize for Customer {
    fn from_tree(this: &Shared<Self>, data: &TreeMap) {
        {
            let mut entity = this.borrow_mut();
            entity.set_id(data.get_i64("id"));
            entity.set_name(data.get_text("name"));
            entity.set_status_from_value(data.get_str("status"));
            entity.set_birthday(data.get_date("birthday"));
            if let Some(value) = data.get_map("address") {
                entity.set_address(Some(Address::new_from_tree(value)));
            }
        }
        if let Some(children) = data.get_list("orders") {
            for child in children {
                if let Some(child) = child.as_map() {
                    Self::add_to_orders(this, Order::new_from_tree(child));
                }
            }
        }
    }
}

///
/// Order
///

#[derive(Debug, Default)]
pub struct Order {
    id: Option<i64>,
    total: Option<f64>,
    created: Option<Timestamp>,
    customer_id: Option<i64>,
    customer: Option<Shared<Customer>>,
    items: Option<Vec<Shared<OrderItem>>>,
}

impl Order {
    pub const TABLE_NAME: &'static str = "ORDER";
    pub const COLUMN_ID: &'static str = "ID";
    pub const COLUMN_TOTAL: &'static str = "TOTAL";
    pub const COLUMN_CREATED: &'static str = "CREATED";
    pub const COLUMN_CUSTOMER_ID: &'static str = "CUSTOMER_ID";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_id(&self) -> Option<i64> {
        self.id
    }

    pub fn set_id(&mut self, value: Option<i64>) {
        self.id = value;
    }

    pub fn get_total(&self) -> Option<f64> {
        self.total
    }

    pub fn set_total(&mut self, value: Option<f64>) {
        self.total = value;
    }

    pub fn get_created(&self) -> Option<Timestamp> {
        self.created
    }

    pub fn set_created(&mut self, value: Option<Timestamp>) {
        self.created = value;
    }

    pub fn get_customer_id(&self) -> Option<i64> {
        self.customer_id
    }

    pub fn set_customer_id(&mut self, value: Option<i64>) {
        self.customer_id = value;
    }

    pub fn get_customer(&self) -> Option<Shared<Customer>> {
        self.customer.clone()
    }

    /// Setting the reference denormalizes the mapped foreign-key attributes.
    pub fn set_customer(&mut self, value: Option<Shared<Customer>>) {
        self.customer_id = value.as_ref().and_then(|foreign| foreign.borrow().get_id());
        self.customer = value;
    }

    pub fn get_items(&self) -> &[Shared<OrderItem>] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn add_to_items(this: &Shared<Self>, child: Shared<OrderItem>) {
        child.borrow_mut().set_order(Some(Shared::clone(this)));
        this.borrow_mut()
            .items
            .get_or_insert_with(Vec::new)
            .push(child);
    }

    pub fn generate_primary_key(&mut self, provider: &mut dyn SequenceProvider) {
        if self.id.is_none() {
            self.id = Some(provider.next_value("order_seq"));
        }
    }
}

impl TreeSerialize for Order {
    fn to_tree_with(&self, detector: &mut CycleDetector) -> Tree {
        if !detector.can_proceed(ObjectIdentity::of(self)) {
            return Tree::Null;
        }
        let mut data = TreeMap::new();
        data.insert("id", Tree::from(self.id));
        data.insert("total", Tree::from(self.total));
        data.insert(
            "created",
            self.created.map_or(Tree::Null, |v| Tree::from(v.to_string())),
        );
        data.insert("customer_id", Tree::from(self.customer_id));
        data.insert(
            "customer",
            self.customer
                .as_ref()
                .map_or(Tree::Null, |foreign| foreign.borrow().to_tree_with(detector)),
        );
        let mut items = Vec::new();
        for child in self.items.as_deref().unwrap_or_default() {
            items.push(child.borrow().to_tree_with(detector));
        }
        data.insert("items", Tree::List(items));
        Tree::Map(data)
    }
}

impl TreeDeserialize for Order {
    fn from_tree(this: &Shared<Self>, data: &TreeMap) {
        {
            let mut entity = this.borrow_mut();
            entity.set_id(data.get_i64("id"));
            entity.set_total(data.get_f64("total"));
            entity.set_created(data.get_timestamp("created"));
            entity.set_customer_id(data.get_i64("customer_id"));
            entity.set_customer(data.get_map("customer").map(Customer::new_from_tree));
        }
        if let Some(children) = data.get_list("items") {
            for child in children {
                if let Some(child) = child.as_map() {
                    Self::add_to_items(this, OrderItem::new_from_tree(child));
                }
            }
        }
    }
}

///
/// OrderItem
///

#[derive(Debug, Default)]
pub struct OrderItem {
    id: Option<i64>,
    label: Option<String>,
    quantity: Option<i64>,
    meta: Option<Tree>,
    order_id: Option<i64>,
    order: Option<Shared<Order>>,
}

impl OrderItem {
    pub const TABLE_NAME: &'static str = "ORDER_ITEM";
    pub const COLUMN_ID: &'static str = "ID";
    pub const COLUMN_LABEL: &'static str = "LABEL";
    pub const COLUMN_QUANTITY: &'static str = "QUANTITY";
    pub const COLUMN_META: &'static str = "META";
    pub const COLUMN_ORDER_ID: &'static str = "ORDER_ID";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_id(&self) -> Option<i64> {
        self.id
    }

    pub fn set_id(&mut self, value: Option<i64>) {
        self.id = value;
    }

    pub fn get_label(&self) -> Option<String> {
        self.label.clone()
    }

    pub fn set_label(&mut self, value: Option<String>) {
        self.label = value;
    }

    pub fn get_quantity(&self) -> Option<i64> {
        self.quantity
    }

    pub fn set_quantity(&mut self, value: Option<i64>) {
        self.quantity = value;
    }

    pub fn get_meta(&self) -> Option<Tree> {
        self.meta.clone()
    }

    pub fn set_meta(&mut self, value: Option<Tree>) {
        self.meta = value;
    }

    pub fn get_order_id(&self) -> Option<i64> {
        self.order_id
    }

    pub fn set_order_id(&mut self, value: Option<i64>) {
        self.order_id = value;
    }

    pub fn get_order(&self) -> Option<Shared<Order>> {
        self.order.clone()
    }

    pub fn set_order(&mut self, value: Option<Shared<Order>>) {
        self.order_id = value.as_ref().and_then(|foreign| foreign.borrow().get_id());
        self.order = value;
    }
}

impl TreeSerialize for OrderItem {
    fn to_tree_with(&self, detector: &mut CycleDetector) -> Tree {
        if !detector.can_proceed(ObjectIdentity::of(self)) {
            return Tree::Null;
        }
        let mut data = TreeMap::new();
        data.insert("id", Tree::from(self.id));
        data.insert("label", Tree::from(self.label.clone()));
        data.insert("quantity", Tree::from(self.quantity));
        data.insert("meta", Tree::from(self.meta.clone()));
        data.insert("order_id", Tree::from(self.order_id));
        data.insert(
            "order",
            self.order
                .as_ref()
                .map_or(Tree::Null, |foreign| foreign.borrow().to_tree_with(detector)),
        );
        Tree::Map(data)
    }
}

impl TreeDeserialize for OrderItem {
    fn from_tree(this: &Shared<Self>, data: &TreeMap) {
        let mut entity = this.borrow_mut();
        entity.set_id(data.get_i64("id"));
        entity.set_label(data.get_text("label"));
        entity.set_quantity(data.get_i64("quantity"));
        entity.set_meta(data.get_tree("meta"));
        entity.set_order_id(data.get_i64("order_id"));
        entity.set_order(data.get_map("order").map(Order::new_from_tree));
    }
}

///
/// Category
/// Self-referential: parent reference and children collection on one type.
///

#[derive(Debug, Default)]
pub struct Category {
    id: Option<i64>,
    name: Option<String>,
    parent_id: Option<i64>,
    parent: Option<Shared<Category>>,
    children: Option<Vec<Shared<Category>>>,
}

impl Category {
    pub const TABLE_NAME: &'static str = "CATEGORY";
    pub const COLUMN_ID: &'static str = "ID";
    pub const COLUMN_NAME: &'static str = "NAME";
    pub const COLUMN_PARENT_ID: &'static str = "PARENT_ID";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_id(&self) -> Option<i64> {
        self.id
    }

    pub fn set_id(&mut self, value: Option<i64>) {
        self.id = value;
    }

    pub fn get_name(&self) -> Option<String> {
        self.name.clone()
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn get_parent_id(&self) -> Option<i64> {
        self.parent_id
    }

    pub fn set_parent_id(&mut self, value: Option<i64>) {
        self.parent_id = value;
    }

    pub fn get_parent(&self) -> Option<Shared<Self>> {
        self.parent.clone()
    }

    pub fn set_parent(&mut self, value: Option<Shared<Self>>) {
        // try_borrow fails only when the handle aliases self (self-add);
        // the foreign attribute is then our own
        self.parent_id = value.as_ref().and_then(|foreign| {
            foreign
                .try_borrow()
                .map_or(self.id, |foreign| foreign.get_id())
        });
        self.parent = value;
    }

    pub fn get_children(&self) -> &[Shared<Self>] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn add_to_children(this: &Shared<Self>, child: Shared<Self>) {
        child.borrow_mut().set_parent(Some(Shared::clone(this)));
        this.borrow_mut()
            .children
            .get_or_insert_with(Vec::new)
            .push(child);
    }
}

impl TreeSerialize for Category {
    fn to_tree_with(&self, detector: &mut CycleDetector) -> Tree {
        if !detector.can_proceed(ObjectIdentity::of(self)) {
            return Tree::Null;
        }
        let mut data = TreeMap::new();
        data.insert("id", Tree::from(self.id));
        data.insert("name", Tree::from(self.name.clone()));
        data.insert("parent_id", Tree::from(self.parent_id));
        data.insert(
            "parent",
            self.parent
                .as_ref()
                .map_or(Tree::Null, |foreign| foreign.borrow().to_tree_with(detector)),
        );
        let mut children = Vec::new();
        for child in self.children.as_deref().unwrap_or_default() {
            children.push(child.borrow().to_tree_with(detector));
        }
        data.insert("children", Tree::List(children));
        Tree::Map(data)
    }
}

impl TreeDeserialize for Category {
    fn from_tree(this: &Shared<Self>, data: &TreeMap) {
        {
            let mut entity = this.borrow_mut();
            entity.set_id(data.get_i64("id"));
            entity.set_name(data.get_text("name"));
            entity.set_parent_id(data.get_i64("parent_id"));
            entity.set_parent(data.get_map("parent").map(Self::new_from_tree));
        }
        if let Some(children) = data.get_list("children") {
            for child in children {
                if let Some(child) = child.as_map() {
                    Self::add_to_children(this, Self::new_from_tree(child));
                }
            }
        }
    }
}
