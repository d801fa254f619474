extern crate proc_macro;

mod attributes;

use crate::attributes::JbindAttributes;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, LitStr};

/// Implements `jbind::JavaClass` and `jbind::JniSignature` for a type.
///
/// The Java class is named with `#[jbind(class_name = "net.example.Point")]`. The type maps to a
/// data class unless the `native` flag is present, as in `#[jbind(class_name = "...", native)]`.
#[proc_macro_derive(JavaClass, attributes(jbind))]
pub fn derive_java_class(input: TokenStream) -> TokenStream {
    let parsed_input = parse_macro_input!(input as DeriveInput);
    let attributes = JbindAttributes::new(&parsed_input.attrs);
    let class_name = attributes
        .get_value("class_name")
        .expect("Missing Java class name")
        .clone();

    let kind = if attributes.has_flag("native") {
        quote! { jbind::ClassKind::Native }
    } else {
        quote! { jbind::ClassKind::Data }
    };

    let type_name = parsed_input.ident;
    let (impl_generics, type_generics, where_clause) = parsed_input.generics.split_for_impl();
    let internal_name = generate_internal_name(&class_name);

    let tokens = quote! {
        const _: () = jbind::check_qualified_name(#class_name);

        impl #impl_generics jbind::JavaClass for #type_name #type_generics #where_clause {
            const KIND: jbind::ClassKind = #kind;
            const QUALIFIED_NAME: &'static str = #class_name;
            const CLASS_NAME: jbind::ZStr = #internal_name;
        }

        impl #impl_generics jbind::JniSignature for #type_name #type_generics #where_clause {
            const SIGNATURE: jbind::ZStr = jbind::join!("L", #internal_name, ";");
        }
    };

    TokenStream::from(tokens)
}

fn generate_internal_name(class_name: &LitStr) -> TokenStream2 {
    quote! { jbind::replace!(#class_name, '.', '/') }
}
