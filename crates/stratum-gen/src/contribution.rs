use serde::Serialize;

///
/// Constant
///
/// Associated constant contribution. `value` is the literal text the
/// emitter writes verbatim.
///

#[derive(Clone, Debug, Serialize)]
pub struct Constant {
    pub name: String,
    pub value: String,
}

impl Constant {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

///
/// Member
///
/// Backing field contribution. Members are private storage; access goes
/// through contributed methods.
///

#[derive(Clone, Debug, Serialize)]
pub struct Member {
    pub name: String,
    pub ty: String,
}

impl Member {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

///
/// Receiver
///
/// Shape of a contributed method's self parameter. `Handle` methods are
/// associated functions over the shared cell (`this: &Shared<Self>`), the
/// form collection mutation and ingest need to establish back-references.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Receiver {
    None,
    Ref,
    Mut,
    Handle,
}

///
/// Param
///

#[derive(Clone, Debug, Serialize)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

///
/// Method
///
/// One contributed method: signature plus body lines. The core decides the
/// semantic content; the external emitter owns formatting and imports.
///

#[derive(Clone, Debug, Serialize)]
pub struct Method {
    pub name: String,
    pub receiver: Receiver,
    pub params: Vec<Param>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,

    pub body: Vec<String>,
}

impl Method {
    #[must_use]
    pub fn new(name: impl Into<String>, receiver: Receiver) -> Self {
        Self {
            name: name.into(),
            receiver,
            params: Vec::new(),
            returns: None,
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push(Param::new(name, ty));
        self
    }

    #[must_use]
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    /// Append one body line.
    pub fn line(&mut self, line: impl Into<String>) {
        self.body.push(line.into());
    }
}

///
/// TraitImpl
///
/// A trait implementation contribution; its methods live inside the impl
/// block instead of the inherent one.
///

#[derive(Clone, Debug, Serialize)]
pub struct TraitImpl {
    pub name: String,
    pub methods: Vec<Method>,
}

impl TraitImpl {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

///
/// ClassPlan
///
/// The accumulated, ordered contributions for one generated class. Handed
/// to the external source emitter as-is; order here is emission order.
///

#[derive(Clone, Debug, Serialize)]
pub struct ClassPlan {
    pub type_name: String,
    pub derives: Vec<String>,
    pub constants: Vec<Constant>,
    pub members: Vec<Member>,
    pub methods: Vec<Method>,
    pub trait_impls: Vec<TraitImpl>,
}

impl ClassPlan {
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            derives: Vec::new(),
            constants: Vec::new(),
            members: Vec::new(),
            methods: Vec::new(),
            trait_impls: Vec::new(),
        }
    }

    pub fn add_derive(&mut self, derive: impl Into<String>) {
        let derive = derive.into();
        if !self.derives.contains(&derive) {
            self.derives.push(derive);
        }
    }

    pub fn add_constant(&mut self, constant: Constant) {
        self.constants.push(constant);
    }

    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn add_trait_impl(&mut self, trait_impl: TraitImpl) {
        self.trait_impls.push(trait_impl);
    }

    // lookups, mainly for drivers and tests

    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    #[must_use]
    pub fn trait_impl(&self, name: &str) -> Option<&TraitImpl> {
        self.trait_impls.iter().find(|t| t.name == name)
    }

    #[must_use]
    pub fn method_count(&self, name: &str) -> usize {
        self.methods.iter().filter(|m| m.name == name).count()
    }
}
