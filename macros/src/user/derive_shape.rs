//! `#[derive(Shape)]` for newtype wrappers around a shape.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_quote, Data, DeriveInput, Fields, Member};

/// Forward `Shape<T, N>` to the single field of a struct, for every `(T, N)`
/// the field supports.
///
/// ```ignore
/// #[derive(Shape)]
/// struct Ring(Union<Circle, Circle>);
///
/// // expands to
/// impl<__T, const __N: usize> Shape<__T, __N> for Ring
/// where
///     __T: Scalar,
///     Union<Circle, Circle>: Shape<__T, __N>,
/// { ... }
/// ```
pub fn expand_derive_shape(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "#[derive(Shape)] only supports structs\n\
                 \n\
                 Wrap the shape in a struct with exactly one field.",
            ));
        }
    };

    let field = match fields {
        Fields::Named(named) if named.named.len() == 1 => &named.named[0],
        Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => &unnamed.unnamed[0],
        _ => {
            return Err(syn::Error::new_spanned(
                fields,
                format!(
                    "#[derive(Shape)] requires exactly one field, `{}` has {}\n\
                     \n\
                     The wrapped field is the shape that answers membership queries.",
                    ident,
                    fields.len()
                ),
            ));
        }
    };

    let member = match &field.ident {
        Some(name) => Member::Named(name.clone()),
        None => Member::Unnamed(0.into()),
    };
    let field_ty = &field.ty;

    let coord = format_ident!("__T");
    let arity = format_ident!("__N");

    let (_, ty_generics, _) = input.generics.split_for_impl();

    let mut generics = input.generics.clone();
    generics.params.push(parse_quote!(#coord));
    generics.params.push(parse_quote!(const #arity: usize));
    {
        let where_clause = generics.make_where_clause();
        where_clause
            .predicates
            .push(parse_quote!(#coord: ::shape_algebra::Scalar));
        where_clause
            .predicates
            .push(parse_quote!(#field_ty: ::shape_algebra::Shape<#coord, #arity>));
    }
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::shape_algebra::Shape<#coord, #arity> for #ident #ty_generics
        #where_clause
        {
            #[inline]
            fn contains(&self, point: [#coord; #arity]) -> bool {
                <#field_ty as ::shape_algebra::Shape<#coord, #arity>>::contains(&self.#member, point)
            }
        }
    })
}
