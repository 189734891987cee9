//! Derive macros for the aoc-core solver framework

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Lit, LitInt, parse_macro_input};

/// Derives the `Solver` trait from `PartSolver<N>` impls.
///
/// The `#[aoc_solver(parts = N)]` attribute states how many parts the day
/// implements; the generated `solve_part` dispatches part numbers `1..=N`
/// onto the corresponding `PartSolver` impls. A missing `PartSolver<K>` impl
/// for any `K` in range is a compile error, so the part count cannot drift
/// out of sync with the implemented parts.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(parts = 2)]
/// struct Day1;
///
/// impl AocParser for Day1 { /* ... */ }
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .expect("AocSolver derive macro requires a #[aoc_solver(parts = N)] attribute");

    let mut parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                parts = Some(lit_int.base10_parse()?);
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[aoc_solver(...)] attribute");

    let parts = parts.expect("Missing required 'parts' attribute");
    assert!(
        (1..=25).contains(&parts),
        "'parts' must be between 1 and 25"
    );

    // One match arm per part, dispatching to the const-generic impl
    let arms = (1..=parts).map(|n| {
        let lit = LitInt::new(&n.to_string(), Span::call_site());
        quote! {
            #lit => <Self as ::aoc_core::PartSolver<#lit>>::solve(shared),
        }
    });

    let expanded = quote! {
        impl ::aoc_core::Solver for #name {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_core::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_core::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(
                        ::aoc_core::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro registering a solver with the plugin system.
///
/// Generates an `inventory::submit!` of a `SolverPlugin` so the solver is
/// discovered by `RegistryBuilder::register_all_plugins` without any manual
/// wiring.
///
/// # Attributes
///
/// - `year`: required, the Advent of Code year
/// - `day`: required, the day number (1-25)
/// - `tags`: optional, array of string literals for filtering
///
/// The type must implement `Solver`; if it doesn't, the generated
/// compile-time bound produces a direct "trait not satisfied" error on the
/// type instead of an opaque failure inside the submit block.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(parts = 2)]
/// #[aoc(year = 2018, day = 1, tags = ["2018"])]
/// struct Day1;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .expect("AutoRegisterSolver derive macro requires an #[aoc(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    aoc_attr
        .parse_nested_meta(|meta| {
            if meta.path.is_ident("year") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    year = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("day") {
                let value: Lit = meta.value()?.parse()?;
                if let Lit::Int(lit_int) = value {
                    day = Some(lit_int.base10_parse()?);
                }
            } else if meta.path.is_ident("tags") {
                // tags = ["a", "b"]
                let _ = meta.value()?;
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    if let Lit::Str(lit_str) = lit {
                        tags.push(lit_str.value());
                    }
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
            }
            Ok(())
        })
        .expect("Failed to parse #[aoc(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");
    assert!((1..=25).contains(&day), "'day' must be between 1 and 25");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_core::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_core::inventory::submit! {
            ::aoc_core::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
