use std::collections::HashMap;
use syn::{Attribute, Ident, Lit, LitStr, Meta, NestedMeta};

/// Contents of the `#[jbind(...)]` attributes of an item.
pub struct JbindAttributes {
    flags: Vec<Ident>,
    values: HashMap<String, LitStr>,
}

impl JbindAttributes {
    pub fn new(attributes: &[Attribute]) -> Self {
        let mut flags = Vec::new();
        let mut values = HashMap::new();

        for attribute in attributes {
            if !attribute.path.is_ident("jbind") {
                continue;
            }

            let list = match attribute.parse_meta() {
                Ok(Meta::List(list)) => list,
                _ => panic!("Expected a list of parameters in jbind attribute"),
            };

            for nested in list.nested {
                match nested {
                    NestedMeta::Meta(Meta::Path(path)) => {
                        let flag = path.get_ident().expect("Invalid jbind flag").clone();

                        flags.push(flag);
                    }
                    NestedMeta::Meta(Meta::NameValue(name_value)) => {
                        let name = name_value
                            .path
                            .get_ident()
                            .expect("Invalid jbind parameter name")
                            .to_string();
                        let value = match name_value.lit {
                            Lit::Str(value) => value,
                            _ => panic!("jbind({} = ...) expects a string literal", name),
                        };

                        values.insert(name, value);
                    }
                    _ => panic!("Invalid parameter in jbind attribute"),
                }
            }
        }

        JbindAttributes { flags, values }
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|ident| ident == flag)
    }

    pub fn get_value(&self, name: &str) -> Option<&LitStr> {
        self.values.get(name)
    }
}
